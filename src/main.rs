//! Crypto spot-price ETL service.
//!
//! Periodically fetches spot prices for a fixed set of assets from the
//! CoinGecko simple-price endpoint, flattens each response into per-asset
//! records sharing one capture stamp, and appends them to a local SQLite
//! store. Runs until the process is terminated; the accumulated history is
//! charted out-of-band with `cargo run --bin show_chart`.

use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crypto_etl::config::{
    ASSET_IDS, COINGECKO_API_BASE, DEFAULT_DB_PATH, FETCH_INTERVAL_SECS, VS_CURRENCY,
};
use crypto_etl::scheduler::Scheduler;
use crypto_etl::{extract, job};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with both stdout and file output
    let file_appender = tracing_appender::rolling::never(".", "etl.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("crypto_etl=info".parse().unwrap());

    // Stdout layer
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    // File layer
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("🚀 Crypto price ETL service starting");
    info!("   Endpoint: {}/simple/price", COINGECKO_API_BASE);
    info!(
        "   Assets: {} | quote currency: {}",
        ASSET_IDS.join(","),
        VS_CURRENCY
    );
    info!(
        "   Interval: {}s | store: {}",
        FETCH_INTERVAL_SECS, DEFAULT_DB_PATH
    );

    let client = extract::http_client();

    let mut scheduler = Scheduler::new();
    scheduler.every(
        "price-etl",
        Duration::from_secs(FETCH_INTERVAL_SECS),
        move || {
            let client = client.clone();
            async move {
                let rows = job::run_once(&client, DEFAULT_DB_PATH).await?;
                info!("[JOB] Cycle complete: {} rows appended", rows);
                Ok(())
            }
        },
    );

    info!(
        "✅ Scheduler armed with {} job(s) - press Ctrl+C to stop",
        scheduler.job_count()
    );
    scheduler.run_forever().await;

    Ok(())
}
