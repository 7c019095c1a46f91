//! Exact-key lookup and multi-criteria search.
//!
//! [`search`] assembles its WHERE clause from a structured filter record —
//! user values only ever travel as bound parameters, never as query text.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::store::error::StoreError;
use crate::store::types::{Recommendation, SearchFilter};

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Recommendation> {
    Ok(Recommendation {
        product_id: row.get(0)?,
        related_product_id: row.get(1)?,
        type_id: row.get(2)?,
        status: row.get(3)?,
    })
}

/// Exact composite-key lookup.
pub fn retrieve(
    conn: &Connection,
    product_id: i64,
    related_product_id: i64,
) -> Result<Recommendation, StoreError> {
    conn.query_row(
        "SELECT product_id, related_product_id, type_id, status FROM recommendations \
         WHERE product_id = ?1 AND related_product_id = ?2",
        params![product_id, related_product_id],
        record_from_row,
    )
    .optional()?
    .ok_or_else(|| StoreError::not_found(product_id, related_product_id))
}

/// Search records matching all supplied criteria.
///
/// Results come back in `(product_id, related_product_id)` key order so
/// repeated identical queries are reproducible. No match is an empty vec,
/// never an error.
pub fn search(conn: &Connection, filter: &SearchFilter) -> Result<Vec<Recommendation>, StoreError> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut bindings: Vec<Value> = Vec::new();

    if let Some(product_id) = filter.product_id {
        clauses.push("product_id = ?");
        bindings.push(Value::Integer(product_id));
    }
    if let Some(related_product_id) = filter.related_product_id {
        clauses.push("related_product_id = ?");
        bindings.push(Value::Integer(related_product_id));
    }
    if let Some(type_id) = filter.type_id {
        clauses.push("type_id = ?");
        bindings.push(Value::Integer(type_id));
    }
    if let Some(status) = filter.status {
        clauses.push("status = ?");
        bindings.push(Value::Integer(status as i64));
    }

    let mut sql = String::from(
        "SELECT product_id, related_product_id, type_id, status FROM recommendations",
    );
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY product_id, related_product_id");

    let mut stmt = conn.prepare(&sql)?;
    let records = stmt
        .query_map(params_from_iter(bindings), record_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}
