use thiserror::Error;

/// Errors raised anywhere in the scan pipeline
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing required environment variable: {0}")]
    MissingCredential(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Market data request for {symbol} ({interval}) returned {status}: {body}")]
    MarketData {
        symbol: String,
        interval: String,
        status: u16,
        body: String,
    },

    #[error("Malformed candle: {0}")]
    MalformedCandle(String),

    #[error("Insufficient data: need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Notification rejected with status {status}: {body}")]
    Notification { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;
