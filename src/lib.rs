//! Periodic cryptocurrency spot-price ETL service.
//!
//! Fetches spot prices from the CoinGecko simple-price endpoint on a fixed
//! interval, flattens each response into per-asset records stamped with one
//! shared capture time, and appends them to a local SQLite store. A separate
//! chart binary reads the accumulated history back and renders a per-asset
//! time-series line chart.
//!
//! ## Architecture
//!
//! - **Extractor** (`extract`) - one bounded HTTP GET per cycle
//! - **Transformer** (`transform`) - payload to flat records, fail-fast on malformed input
//! - **Loader** (`storage`) - append-only SQLite writes, fresh connection per cycle
//! - **Scheduler** (`scheduler`) - explicit job registry polled on a fixed quantum
//! - **Visualizer** (`chart`) - out-of-band read-side chart rendering

pub mod chart;
pub mod config;
pub mod extract;
pub mod job;
pub mod scheduler;
pub mod storage;
pub mod transform;
