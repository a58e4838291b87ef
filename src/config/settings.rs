/// Scan configuration loaded from JSON

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::algo::{DEFAULT_LONG_SPAN, DEFAULT_SHORT_SPAN};
use crate::core::{ScanError, ScanResult};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "EMA_CONFIG";
pub const DEFAULT_MARKET_DATA_URL: &str = "https://api.binance.com";
pub const DEFAULT_MESSAGING_URL: &str = "https://api.telegram.org";
pub const MAX_KLINE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub intervals: Vec<String>,
    // Older configs carry a single `interval` string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_short_span")]
    pub short_span: usize,
    #[serde(default = "default_long_span")]
    pub long_span: usize,
    #[serde(default = "default_market_data_url")]
    pub market_data_url: String,
    #[serde(default = "default_messaging_url")]
    pub messaging_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_limit() -> usize {
    100
}

fn default_short_span() -> usize {
    DEFAULT_SHORT_SPAN
}

fn default_long_span() -> usize {
    DEFAULT_LONG_SPAN
}

fn default_market_data_url() -> String {
    DEFAULT_MARKET_DATA_URL.to_string()
}

fn default_messaging_url() -> String {
    DEFAULT_MESSAGING_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            intervals: vec!["5m".to_string()],
            interval: None,
            limit: default_limit(),
            short_span: default_short_span(),
            long_span: default_long_span(),
            market_data_url: default_market_data_url(),
            messaging_url: default_messaging_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ScanConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ScanResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse, apply defaults and validate
    pub fn from_json(content: &str) -> ScanResult<Self> {
        let mut config: ScanConfig = serde_json::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// First CLI argument, then `EMA_CONFIG`, then `config.json`
    pub fn resolve_path(cli_arg: Option<String>, env_value: Option<String>) -> String {
        cli_arg
            .filter(|p| !p.trim().is_empty())
            .or_else(|| env_value.filter(|p| !p.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
    }

    fn normalize(&mut self) {
        if self.intervals.is_empty() {
            self.intervals = match self.interval.take() {
                Some(single) => vec![single],
                None => vec!["5m".to_string()],
            };
        }
        self.interval = None;

        self.symbols = self.symbols.iter().map(|s| s.trim().to_uppercase()).collect();
        self.intervals = self.intervals.iter().map(|i| i.trim().to_string()).collect();
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.limit < 2 {
            return Err(ScanError::Config(format!(
                "limit must be at least 2 to compare two candles, got {}",
                self.limit
            )));
        }
        if self.limit > MAX_KLINE_LIMIT {
            return Err(ScanError::Config(format!(
                "limit must not exceed {}, got {}",
                MAX_KLINE_LIMIT, self.limit
            )));
        }
        if self.short_span == 0 || self.long_span == 0 {
            return Err(ScanError::Config("EMA spans must be at least 1".to_string()));
        }
        if self.short_span >= self.long_span {
            return Err(ScanError::Config(format!(
                "short_span ({}) must be less than long_span ({})",
                self.short_span, self.long_span
            )));
        }
        if self.symbols.iter().any(|s| s.is_empty()) {
            return Err(ScanError::Config("symbols must not contain empty entries".to_string()));
        }
        if self.intervals.iter().any(|i| i.is_empty()) {
            return Err(ScanError::Config("intervals must not contain empty entries".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ScanError::Config("request_timeout_secs must be positive".to_string()));
        }
        self.market_data_base()?;
        self.messaging_base()?;
        Ok(())
    }

    pub fn market_data_base(&self) -> ScanResult<Url> {
        parse_base_url("market_data_url", &self.market_data_url)
    }

    pub fn messaging_base(&self) -> ScanResult<Url> {
        parse_base_url("messaging_url", &self.messaging_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Symbol-major cartesian product of symbols and intervals
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.symbols
            .iter()
            .flat_map(|symbol| {
                self.intervals
                    .iter()
                    .map(move |interval| (symbol.clone(), interval.clone()))
            })
            .collect()
    }
}

fn parse_base_url(key: &str, raw: &str) -> ScanResult<Url> {
    Url::parse(raw).map_err(|e| ScanError::Config(format!("{} '{}' is not a valid URL: {}", key, raw, e)))
}
