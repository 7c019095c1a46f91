//! Record mutation: wholesale update and status toggle.
//!
//! Toggle inverts the status inside the database (`SET status = NOT status`)
//! rather than writing back a value read earlier in the request, so N
//! toggles against one key always net to N flips.

use rusqlite::{params, Connection};

use crate::store::error::StoreError;
use crate::store::types::Recommendation;

/// Replace `type_id` and `status` for an existing record.
///
/// Never creates: a missing key is [`StoreError::NotFound`].
pub fn update(conn: &mut Connection, record: &Recommendation) -> Result<Recommendation, StoreError> {
    let tx = conn.transaction()?;

    let rows = tx.execute(
        "UPDATE recommendations SET type_id = ?1, status = ?2 \
         WHERE product_id = ?3 AND related_product_id = ?4",
        params![
            record.type_id,
            record.status,
            record.product_id,
            record.related_product_id,
        ],
    )?;
    if rows == 0 {
        return Err(StoreError::not_found(
            record.product_id,
            record.related_product_id,
        ));
    }

    tx.commit()?;

    tracing::info!(
        product_id = record.product_id,
        related_product_id = record.related_product_id,
        type_id = record.type_id,
        status = record.status,
        "recommendation updated"
    );

    Ok(*record)
}

/// Flip `status` to its negation, leaving `type_id` unchanged.
///
/// The inversion and the read-back run in one transaction against the
/// persisted value, so concurrent toggles on the same key serialize and
/// compose by parity instead of losing updates.
pub fn toggle(
    conn: &mut Connection,
    product_id: i64,
    related_product_id: i64,
) -> Result<Recommendation, StoreError> {
    let tx = conn.transaction()?;

    let rows = tx.execute(
        "UPDATE recommendations SET status = NOT status \
         WHERE product_id = ?1 AND related_product_id = ?2",
        params![product_id, related_product_id],
    )?;
    if rows == 0 {
        return Err(StoreError::not_found(product_id, related_product_id));
    }

    let record = tx.query_row(
        "SELECT product_id, related_product_id, type_id, status FROM recommendations \
         WHERE product_id = ?1 AND related_product_id = ?2",
        params![product_id, related_product_id],
        |row| {
            Ok(Recommendation {
                product_id: row.get(0)?,
                related_product_id: row.get(1)?,
                type_id: row.get(2)?,
                status: row.get(3)?,
            })
        },
    )?;

    tx.commit()?;

    tracing::info!(
        product_id,
        related_product_id,
        status = record.status,
        "recommendation toggled"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::store::create::create;
    use crate::store::query::retrieve;

    fn test_db() -> Connection {
        db::open_memory_database().unwrap()
    }

    fn seed(conn: &mut Connection, p: i64, r: i64, t: i64, status: bool) {
        create(
            conn,
            &Recommendation {
                product_id: p,
                related_product_id: r,
                type_id: t,
                status,
            },
        )
        .unwrap();
    }

    #[test]
    fn update_replaces_type_and_status() {
        let mut conn = test_db();
        seed(&mut conn, 10, 22, 2, true);

        update(
            &mut conn,
            &Recommendation {
                product_id: 10,
                related_product_id: 22,
                type_id: 3,
                status: false,
            },
        )
        .unwrap();

        let record = retrieve(&conn, 10, 22).unwrap();
        assert_eq!(record.type_id, 3);
        assert!(!record.status);
    }

    #[test]
    fn update_missing_key_is_not_found_and_never_creates() {
        let mut conn = test_db();

        let err = update(
            &mut conn,
            &Recommendation {
                product_id: 10,
                related_product_id: 99,
                type_id: 2,
                status: false,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                product_id: 10,
                related_product_id: 99
            }
        ));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM recommendations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn toggle_inverts_status_and_preserves_type() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 3, true);

        let flipped = toggle(&mut conn, 1, 2).unwrap();
        assert!(!flipped.status);
        assert_eq!(flipped.type_id, 3);

        let back = toggle(&mut conn, 1, 2).unwrap();
        assert!(back.status);
        assert_eq!(back.type_id, 3);
    }

    #[test]
    fn toggle_missing_key_is_not_found() {
        let mut conn = test_db();

        let err = toggle(&mut conn, 4, 5).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
