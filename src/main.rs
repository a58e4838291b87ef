use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ema_cross_alert::client::BinanceKlineClient;
use ema_cross_alert::config::{Credentials, ScanConfig, CONFIG_PATH_ENV};
use ema_cross_alert::scanner::CrossScanner;
use ema_cross_alert::transport::TelegramNotifier;

fn init_tracing() -> Result<WorkerGuard> {
    std::fs::create_dir_all("logs")?;

    let file_appender = tracing_appender::rolling::daily("logs", "ema-cross-alert.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(true)
        .compact();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .json()
        .with_current_span(false)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    Ok(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _guard = init_tracing()?;

    // Credentials first: nothing else runs without them
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}. Set TELEGRAM_TOKEN and CHAT_ID as environment variables.", e);
            return Err(e.into());
        }
    };

    let config_path = ScanConfig::resolve_path(
        std::env::args().nth(1),
        std::env::var(CONFIG_PATH_ENV).ok(),
    );
    let config = ScanConfig::load_from_file(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path))?;

    info!(
        config = %config_path,
        symbols = config.symbols.len(),
        intervals = ?config.intervals,
        limit = config.limit,
        "📈 EMA {}/{} cross scan starting",
        config.short_span,
        config.long_span
    );

    let source = BinanceKlineClient::new(config.market_data_base()?, config.request_timeout())?;
    let notifier = TelegramNotifier::new(config.messaging_base()?, credentials, config.request_timeout())?;

    let scanner = CrossScanner::new(source, notifier, config);
    scanner.run().await;

    Ok(())
}
