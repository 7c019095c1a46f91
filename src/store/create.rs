//! Record creation.
//!
//! [`create`] is strictly create, never upsert: an existing record at the
//! ordered pair is a [`StoreError::Conflict`], and callers holding a stale
//! key are expected to use update instead.

use rusqlite::{params, Connection, OptionalExtension};

use crate::store::error::StoreError;
use crate::store::types::Recommendation;

/// Insert a new relationship record.
///
/// Runs the existence check and insert in one transaction; returns the
/// persisted record with identical field values.
pub fn create(conn: &mut Connection, record: &Recommendation) -> Result<Recommendation, StoreError> {
    let tx = conn.transaction()?;

    let existing: Option<i64> = tx
        .query_row(
            "SELECT 1 FROM recommendations \
             WHERE product_id = ?1 AND related_product_id = ?2",
            params![record.product_id, record.related_product_id],
            |row| row.get(0),
        )
        .optional()?;

    if existing.is_some() {
        return Err(StoreError::conflict(
            record.product_id,
            record.related_product_id,
        ));
    }

    tx.execute(
        "INSERT INTO recommendations (product_id, related_product_id, type_id, status) \
         VALUES (?1, ?2, ?3, ?4)",
        params![
            record.product_id,
            record.related_product_id,
            record.type_id,
            record.status,
        ],
    )?;

    tx.commit()?;

    tracing::info!(
        product_id = record.product_id,
        related_product_id = record.related_product_id,
        type_id = record.type_id,
        "recommendation created"
    );

    Ok(*record)
}
