/// Telegram Bot API notifier

use std::time::Duration;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::AlertSink;
use crate::config::Credentials;
use crate::core::{ScanError, ScanResult};

pub struct TelegramNotifier {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl TelegramNotifier {
    pub fn new(base_url: Url, credentials: Credentials, timeout: Duration) -> ScanResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.base_url.as_str().trim_end_matches('/'),
            self.credentials.bot_token
        )
    }
}

impl AlertSink for TelegramNotifier {
    #[instrument(skip(self, message), fields(chat_id = %self.credentials.chat_id))]
    async fn send_alert(&self, message: &str) -> ScanResult<()> {
        let response = self
            .client
            .get(self.send_message_url())
            .query(&[("chat_id", self.credentials.chat_id.as_str()), ("text", message)])
            .send()
            .await
            .map_err(|e| ScanError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScanError::Notification {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Telegram accepted message");
        Ok(())
    }
}
