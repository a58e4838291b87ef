/// Binance spot kline client

use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::CandleSource;
use crate::core::{Candle, ScanError, ScanResult};

const KLINES_PATH: &str = "api/v3/klines";
const OPEN_TIME_IDX: usize = 0;
const OPEN_IDX: usize = 1;
const HIGH_IDX: usize = 2;
const LOW_IDX: usize = 3;
const CLOSE_IDX: usize = 4;
const VOLUME_IDX: usize = 5;
const CLOSE_TIME_IDX: usize = 6;

pub struct BinanceKlineClient {
    client: Client,
    base_url: Url,
}

impl BinanceKlineClient {
    pub fn new(base_url: Url, timeout: Duration) -> ScanResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn klines_url(&self) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), KLINES_PATH)
    }
}

impl CandleSource for BinanceKlineClient {
    #[instrument(skip(self))]
    async fn fetch_candles(&self, symbol: &str, interval: &str, limit: usize) -> ScanResult<Vec<Candle>> {
        let limit_param = limit.to_string();
        let response = self
            .client
            .get(self.klines_url())
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScanError::MarketData {
                symbol: symbol.to_string(),
                interval: interval.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<Vec<Value>> = response.json().await?;
        let candles = parse_klines(&rows)?;
        debug!(symbol, interval, count = candles.len(), "Fetched klines");
        Ok(candles)
    }
}

/// Rows are 12-element arrays; prices arrive as decimal strings, times as ms epochs
pub fn parse_klines(rows: &[Vec<Value>]) -> ScanResult<Vec<Candle>> {
    rows.iter().map(|row| parse_kline_row(row)).collect()
}

fn parse_kline_row(row: &[Value]) -> ScanResult<Candle> {
    if row.len() <= CLOSE_TIME_IDX {
        return Err(ScanError::MalformedCandle(format!(
            "expected at least {} fields, got {}",
            CLOSE_TIME_IDX + 1,
            row.len()
        )));
    }

    Ok(Candle {
        open_time: int_field(row, OPEN_TIME_IDX)?,
        open: price_field(row, OPEN_IDX)?,
        high: price_field(row, HIGH_IDX)?,
        low: price_field(row, LOW_IDX)?,
        close: price_field(row, CLOSE_IDX)?,
        volume: price_field(row, VOLUME_IDX)?,
        close_time: int_field(row, CLOSE_TIME_IDX)?,
    })
}

fn price_field(row: &[Value], idx: usize) -> ScanResult<f64> {
    let parsed = match &row[idx] {
        Value::String(s) => s.parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScanError::MalformedCandle(format!("field {} is not a price: {}", idx, row[idx])))
}

fn int_field(row: &[Value], idx: usize) -> ScanResult<i64> {
    let parsed = match &row[idx] {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ScanError::MalformedCandle(format!("field {} is not a timestamp: {}", idx, row[idx])))
}
