#![allow(dead_code)]

use recsvc::db;
use recsvc::store::{self, Recommendation};
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// Insert a record directly via the store. Returns the persisted record.
pub fn seed(
    conn: &mut Connection,
    product_id: i64,
    related_product_id: i64,
    type_id: i64,
    status: bool,
) -> Recommendation {
    store::create(
        conn,
        &Recommendation {
            product_id,
            related_product_id,
            type_id,
            status,
        },
    )
    .unwrap()
}
