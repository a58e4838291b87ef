/// Outbound alert delivery

pub mod telegram;

pub use telegram::TelegramNotifier;

use crate::core::ScanResult;

/// Destination for cross alert messages
#[allow(async_fn_in_trait)]
pub trait AlertSink {
    async fn send_alert(&self, message: &str) -> ScanResult<()>;
}
