/// Market data clients

pub mod binance;

pub use binance::BinanceKlineClient;

use crate::core::{Candle, ScanResult};

/// Source of chronologically ordered candles for one symbol/interval pair
#[allow(async_fn_in_trait)]
pub trait CandleSource {
    async fn fetch_candles(&self, symbol: &str, interval: &str, limit: usize) -> ScanResult<Vec<Candle>>;
}
