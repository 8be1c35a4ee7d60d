//! Database schema creation.

use rusqlite::{Connection, Result};

/// Create the prices table and its time index if absent.
///
/// The table is append-only and carries no primary key and no uniqueness
/// constraint: duplicate (coin, timestamp) pairs are permitted.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS prices (
            coin TEXT NOT NULL,
            price_usd REAL NOT NULL,
            timestamp TEXT NOT NULL
        )",
        [],
    )?;

    // Index for the timestamp-ordered read path
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_prices_time ON prices(timestamp)",
        [],
    )?;

    Ok(())
}
