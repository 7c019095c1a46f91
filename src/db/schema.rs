//! SQL DDL for the recommendations tables.
//!
//! Defines the `recommendations` table (composite primary key on the ordered
//! product pair) and the `schema_meta` table used by the migration framework.
//! All DDL uses `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements.
const SCHEMA_SQL: &str = r#"
-- Canonical relationship records. The ordered (product_id, related_product_id)
-- pair is the identity: (1,2) and (2,1) are distinct rows.
CREATE TABLE IF NOT EXISTS recommendations (
    product_id INTEGER NOT NULL,
    related_product_id INTEGER NOT NULL,
    type_id INTEGER NOT NULL,
    status BOOLEAN NOT NULL,
    PRIMARY KEY (product_id, related_product_id)
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
