/// Market data and signal types shared across the pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ScanError, ScanResult};

/// One OHLCV kline. Only `close` and `close_time` drive cross detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
}

impl Candle {
    /// Close time as a UTC timestamp, truncated to whole seconds
    pub fn closed_at(&self) -> ScanResult<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.close_time.div_euclid(1000), 0).ok_or_else(|| {
            ScanError::MalformedCandle(format!("close time out of range: {}", self.close_time))
        })
    }
}

pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossSignal {
    Bullish,
    Bearish,
    NoCross,
}

impl std::fmt::Display for CrossSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CrossSignal::Bullish => write!(f, "BULLISH"),
            CrossSignal::Bearish => write!(f, "BEARISH"),
            CrossSignal::NoCross => write!(f, "NO CROSS"),
        }
    }
}

/// A detected cross on the latest candle of one symbol/interval pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossEvent {
    pub symbol: String,
    pub interval: String,
    pub signal: CrossSignal,
    pub closed_at: DateTime<Utc>,
    pub short_span: usize,
    pub long_span: usize,
    pub short_ema: f64,
    pub long_ema: f64,
}

impl CrossEvent {
    /// Text delivered to the messaging endpoint
    pub fn message(&self) -> String {
        let headline = match self.signal {
            CrossSignal::Bullish => format!(
                "🚀 Bullish Cross! {} EMA crossed ABOVE {} EMA on {} ({})",
                self.short_span, self.long_span, self.symbol, self.interval
            ),
            CrossSignal::Bearish => format!(
                "🔻 Bearish Cross! {} EMA crossed BELOW {} EMA on {} ({})",
                self.short_span, self.long_span, self.symbol, self.interval
            ),
            CrossSignal::NoCross => format!(
                "{} EMA and {} EMA did not cross on {} ({})",
                self.short_span, self.long_span, self.symbol, self.interval
            ),
        };
        format!("{}\nTime: {}", headline, self.closed_at.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
