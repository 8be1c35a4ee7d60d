//! Storage record types for SQLite persistence.

use serde::{Deserialize, Serialize};

/// One priced asset observation, as stored in the `prices` table.
///
/// Every record produced by a single ETL cycle shares one `captured_at`
/// stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Asset identifier (e.g. "bitcoin")
    pub asset: String,
    /// Spot price in the target currency
    pub price_usd: f64,
    /// Local wall-clock capture stamp, second precision, no zone marker
    pub captured_at: String,
}
