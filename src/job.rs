//! One Extract -> Transform -> Load cycle.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::extract::{self, ExtractError};
use crate::storage;
use crate::transform::{self, TransformError};

/// A cycle failure, tagged by the stage that aborted it.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("extract failed: {0}")]
    Extract(#[from] ExtractError),
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
    #[error("load failed: {0}")]
    Load(#[from] rusqlite::Error),
}

/// Run one full cycle against `db_path`, returning the rows appended.
///
/// A failure at any stage aborts the cycle before the next stage runs, so a
/// malformed payload never reaches the store.
pub async fn run_once(client: &Client, db_path: &str) -> Result<usize, JobError> {
    let quotes = extract::fetch_quotes(client).await?;
    debug!("[JOB] Fetched quotes for {} assets", quotes.len());

    let records = transform::to_records(&quotes)?;
    let rows = storage::append(&records, db_path)?;

    Ok(rows)
}
