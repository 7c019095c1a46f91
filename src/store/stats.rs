//! Summary statistics over the relationship table.

use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::store::error::StoreError;
use crate::store::types::RelationshipType;

/// Aggregate counts for the whole store.
#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    /// Counts keyed by relationship-type label; codes outside the closed
    /// enumeration are grouped under `"other"`.
    pub by_type: BTreeMap<String, i64>,
}

/// Compute total/active/inactive counts and the per-type breakdown.
pub fn stats(conn: &Connection) -> Result<StoreStats, StoreError> {
    let (total, active): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(status), 0) FROM recommendations",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let mut by_type: BTreeMap<String, i64> = BTreeMap::new();
    let mut stmt = conn.prepare(
        "SELECT type_id, COUNT(*) FROM recommendations GROUP BY type_id",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    for row in rows {
        let (code, count) = row?;
        let label = match RelationshipType::from_code(code) {
            Some(t) => t.as_str().to_string(),
            None => "other".to_string(),
        };
        *by_type.entry(label).or_insert(0) += count;
    }

    Ok(StoreStats {
        total,
        active,
        inactive: total - active,
        by_type,
    })
}
