/// Messaging credentials supplied through the environment

use crate::core::{ScanError, ScanResult};

pub const TOKEN_ENV: &str = "TELEGRAM_TOKEN";
pub const CHAT_ID_ENV: &str = "CHAT_ID";

#[derive(Clone)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    pub fn from_env() -> ScanResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Both values must be present and non-empty
    pub fn from_lookup<F>(lookup: F) -> ScanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ScanError::MissingCredential(key))
        };

        Ok(Self {
            bot_token: read(TOKEN_ENV)?,
            chat_id: read(CHAT_ID_ENV)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_reads_both_values() {
        let vars = env(&[(TOKEN_ENV, "123:abc"), (CHAT_ID_ENV, "-100200")]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.bot_token, "123:abc");
        assert_eq!(creds.chat_id, "-100200");
    }

    #[test]
    fn test_missing_token() {
        let vars = env(&[(CHAT_ID_ENV, "-100200")]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ScanError::MissingCredential(TOKEN_ENV)));
    }

    #[test]
    fn test_empty_chat_id_counts_as_missing() {
        let vars = env(&[(TOKEN_ENV, "123:abc"), (CHAT_ID_ENV, "")]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ScanError::MissingCredential(CHAT_ID_ENV)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("secret-token", "42");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("42"));
    }
}
