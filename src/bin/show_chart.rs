//! Render the stored price history as a time-series line chart.
//!
//! Usage: cargo run --bin show_chart [db_path]

use anyhow::Result;
use crypto_etl::chart::{self, RenderOutcome};
use crypto_etl::config::{DEFAULT_CHART_PATH, DEFAULT_DB_PATH};

fn main() -> Result<()> {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    match chart::render(&db_path, DEFAULT_CHART_PATH)? {
        RenderOutcome::NoData => println!("No data to visualize yet."),
        RenderOutcome::Rendered { series, points } => {
            println!(
                "Rendered {} series ({} points) from {} to {}",
                series, points, db_path, DEFAULT_CHART_PATH
            );
        }
    }

    Ok(())
}
