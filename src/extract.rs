//! Spot price extraction from the CoinGecko simple-price endpoint.
//!
//! One GET per cycle. A 2xx body is parsed as a JSON object and returned
//! as-is, even when it is empty; content validation is deferred entirely to
//! the transformer. Transport failures and non-2xx statuses surface as
//! distinct error variants instead of masquerading as empty data.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::{ASSET_IDS, COINGECKO_API_BASE, HTTP_TIMEOUT_SECS, VS_CURRENCY};

/// Parsed quote payload: asset id -> { currency code -> price }.
///
/// Backed by serde_json's order-preserving map, so downstream iteration
/// follows the response body's key order.
pub type PriceQuoteResponse = serde_json::Map<String, Value>;

/// Failure modes of one extraction call.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Connect, timeout, or body decode failure
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    ServerStatus(StatusCode),
}

/// Build the shared HTTP client with a bounded request timeout.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client")
}

/// Fetch current quotes for the configured assets in the target currency.
pub async fn fetch_quotes(client: &Client) -> Result<PriceQuoteResponse, ExtractError> {
    let url = format!("{}/simple/price", COINGECKO_API_BASE);
    let ids = ASSET_IDS.join(",");

    let resp = client
        .get(&url)
        .query(&[("ids", ids.as_str()), ("vs_currencies", VS_CURRENCY)])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ExtractError::ServerStatus(status));
    }

    Ok(resp.json::<PriceQuoteResponse>().await?)
}
