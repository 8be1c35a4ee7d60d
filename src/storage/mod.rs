//! SQLite storage module for price history persistence.
//!
//! Provides the append-only write path used by the ETL cycle and the
//! full-table read used by the chart tooling and tests.

pub mod schema;
pub mod store;
pub mod types;

pub use store::{append, read_all};
pub use types::PriceRecord;
