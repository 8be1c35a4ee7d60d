//! Run exactly one ETL cycle against the live CoinGecko API.
//!
//! Usage: cargo run --bin etl_once [db_path]

use anyhow::Result;
use crypto_etl::config::DEFAULT_DB_PATH;
use crypto_etl::{extract, job};

#[tokio::main]
async fn main() -> Result<()> {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    println!("Fetching spot prices from CoinGecko...");
    let client = extract::http_client();
    let rows = job::run_once(&client, &db_path).await?;
    println!("Appended {} rows to {}", rows, db_path);

    Ok(())
}
