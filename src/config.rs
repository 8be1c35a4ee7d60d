//! Service configuration.
//!
//! This module contains all configuration constants for the ETL service.
//! Every parameter is compiled in; there are no CLI flags, environment
//! variables, or config files.

/// CoinGecko REST API base URL
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Asset identifiers fetched on every cycle
pub const ASSET_IDS: &[&str] = &["bitcoin", "ethereum"];

/// Target quote currency
pub const VS_CURRENCY: &str = "usd";

/// Period between ETL cycles (seconds)
pub const FETCH_INTERVAL_SECS: u64 = 300;

/// Scheduler due-check quantum (seconds)
pub const SCHEDULER_TICK_SECS: u64 = 1;

/// HTTP request timeout (seconds)
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default SQLite store path
pub const DEFAULT_DB_PATH: &str = "crypto_prices.db";

/// Default chart output path
pub const DEFAULT_CHART_PATH: &str = "crypto_prices.svg";

/// Capture stamp format: second precision, host-local time, no zone marker
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
