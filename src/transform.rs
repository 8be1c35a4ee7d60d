//! Quote payload to flat record conversion.

use chrono::Local;
use thiserror::Error;

use crate::config::{TIMESTAMP_FORMAT, VS_CURRENCY};
use crate::extract::PriceQuoteResponse;
use crate::storage::PriceRecord;

/// Malformed-payload failures. Either variant aborts the whole batch so a
/// bad upstream payload never reaches the store as partial rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Asset entry carries no quote for the target currency
    #[error("asset {asset:?} carries no {currency:?} quote")]
    MissingCurrency {
        asset: String,
        currency: &'static str,
    },
    /// Asset entry quotes the target currency with a non-numeric value
    #[error("asset {asset:?} has a non-numeric {currency:?} quote")]
    NonNumericQuote {
        asset: String,
        currency: &'static str,
    },
}

/// Flatten a quote payload into one record per asset, preserving payload
/// order. Every record of the batch shares a single capture stamp taken at
/// entry. An empty payload yields an empty batch.
pub fn to_records(quotes: &PriceQuoteResponse) -> Result<Vec<PriceRecord>, TransformError> {
    let captured_at = Local::now().format(TIMESTAMP_FORMAT).to_string();

    let mut records = Vec::with_capacity(quotes.len());
    for (asset, currencies) in quotes {
        let quote = currencies
            .get(VS_CURRENCY)
            .ok_or_else(|| TransformError::MissingCurrency {
                asset: asset.clone(),
                currency: VS_CURRENCY,
            })?;
        let price_usd = quote
            .as_f64()
            .ok_or_else(|| TransformError::NonNumericQuote {
                asset: asset.clone(),
                currency: VS_CURRENCY,
            })?;

        records.push(PriceRecord {
            asset: asset.clone(),
            price_usd,
            captured_at: captured_at.clone(),
        });
    }

    Ok(records)
}
