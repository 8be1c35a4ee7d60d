//! Append and read operations on the prices table.

use chrono::Local;
use rusqlite::{params, Connection, Result};
use tracing::info;

use super::schema::create_tables;
use super::types::PriceRecord;
use crate::config::TIMESTAMP_FORMAT;

/// Append a batch of records to the store, creating the table on first use.
///
/// Opens a fresh connection per call; the whole batch is inserted inside one
/// transaction. Existing rows are never updated or deleted. Returns the
/// number of rows written.
pub fn append(records: &[PriceRecord], db_path: &str) -> Result<usize> {
    let conn = Connection::open(db_path)?;
    create_tables(&conn)?;

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt =
            tx.prepare("INSERT INTO prices (coin, price_usd, timestamp) VALUES (?1, ?2, ?3)")?;
        for record in records {
            stmt.execute(params![record.asset, record.price_usd, record.captured_at])?;
        }
    }
    tx.commit()?;

    info!(
        "[STORAGE] Loaded {} rows into {} at {}",
        records.len(),
        db_path,
        Local::now().format(TIMESTAMP_FORMAT)
    );

    Ok(records.len())
}

/// Read the entire table back, oldest first.
///
/// A store without a prices table reads as empty rather than failing, so
/// read-side tooling can run before the first ETL cycle.
pub fn read_all(db_path: &str) -> Result<Vec<PriceRecord>> {
    let conn = Connection::open(db_path)?;

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'prices')",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Ok(Vec::new());
    }

    let mut stmt =
        conn.prepare("SELECT coin, price_usd, timestamp FROM prices ORDER BY timestamp ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(PriceRecord {
            asset: row.get(0)?,
            price_usd: row.get(1)?,
            captured_at: row.get(2)?,
        })
    })?;

    rows.collect()
}
