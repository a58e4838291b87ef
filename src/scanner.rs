/// Scan orchestration: fetch -> EMA -> cross detection -> alert, one pair at a time

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::algo::{detect_crossover, exponential_moving_average};
use crate::client::CandleSource;
use crate::config::ScanConfig;
use crate::core::{closes, Candle, CrossEvent, CrossSignal, ScanError, ScanResult};
use crate::transport::AlertSink;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub pairs_scanned: usize,
    pub bullish: usize,
    pub bearish: usize,
    pub quiet: usize,
    pub failed: usize,
    pub notify_failures: usize,
}

/// Classify the latest candle of a series against the one before it
pub fn evaluate_series(
    symbol: &str,
    interval: &str,
    candles: &[Candle],
    short_span: usize,
    long_span: usize,
) -> ScanResult<CrossEvent> {
    let last = candles.last().ok_or(ScanError::InsufficientData { needed: 2, got: 0 })?;

    let prices = closes(candles);
    let short = exponential_moving_average(&prices, short_span);
    let long = exponential_moving_average(&prices, long_span);
    let signal = detect_crossover(&short, &long)?;

    Ok(CrossEvent {
        symbol: symbol.to_string(),
        interval: interval.to_string(),
        signal,
        closed_at: last.closed_at()?,
        short_span,
        long_span,
        short_ema: short[short.len() - 1],
        long_ema: long[long.len() - 1],
    })
}

pub struct CrossScanner<S, N> {
    source: S,
    sink: N,
    config: ScanConfig,
}

impl<S: CandleSource, N: AlertSink> CrossScanner<S, N> {
    pub fn new(source: S, sink: N, config: ScanConfig) -> Self {
        Self { source, sink, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Scan every symbol/interval pair; failures are logged and skipped
    #[instrument(skip(self))]
    pub async fn run(&self) -> ScanReport {
        let mut report = ScanReport::default();

        for (symbol, interval) in self.config.pairs() {
            report.pairs_scanned += 1;

            let event = match self.scan_pair(&symbol, &interval).await {
                Ok(event) => event,
                Err(e) => {
                    error!(symbol = %symbol, interval = %interval, error = %e, "Error scanning {} ({})", symbol, interval);
                    report.failed += 1;
                    continue;
                }
            };

            match event.signal {
                CrossSignal::NoCross => {
                    report.quiet += 1;
                    info!(
                        symbol = %symbol,
                        interval = %interval,
                        short_ema = event.short_ema,
                        long_ema = event.long_ema,
                        "{} ({}): No cross. {}",
                        symbol,
                        interval,
                        Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ")
                    );
                }
                CrossSignal::Bullish | CrossSignal::Bearish => {
                    if event.signal == CrossSignal::Bullish {
                        report.bullish += 1;
                    } else {
                        report.bearish += 1;
                    }
                    if !self.deliver(&event).await {
                        report.notify_failures += 1;
                    }
                }
            }
        }

        info!(
            pairs = report.pairs_scanned,
            bullish = report.bullish,
            bearish = report.bearish,
            quiet = report.quiet,
            failed = report.failed,
            notify_failures = report.notify_failures,
            "Scan complete"
        );
        report
    }

    pub async fn scan_pair(&self, symbol: &str, interval: &str) -> ScanResult<CrossEvent> {
        let candles = self
            .source
            .fetch_candles(symbol, interval, self.config.limit)
            .await?;
        evaluate_series(symbol, interval, &candles, self.config.short_span, self.config.long_span)
    }

    /// Fire-and-forget: a failed send is logged, never retried
    async fn deliver(&self, event: &CrossEvent) -> bool {
        let message = event.message();
        info!(
            symbol = %event.symbol,
            interval = %event.interval,
            signal = %event.signal,
            short_ema = event.short_ema,
            long_ema = event.long_ema,
            "{}",
            message
        );

        match self.sink.send_alert(&message).await {
            Ok(()) => true,
            Err(e) => {
                warn!(symbol = %event.symbol, interval = %event.interval, error = %e, "Telegram send failed");
                false
            }
        }
    }
}
