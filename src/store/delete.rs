//! Physical record deletion.
//!
//! Three explicitly named operations instead of one shape whose meaning
//! depends on which parameters happen to be absent: exact-key delete,
//! product delete narrowed by optional type/status filters, and
//! all-for-product delete. All return the removed-row count; removing zero
//! rows is success, not an error.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use crate::store::error::StoreError;
use crate::store::types::DeleteFilter;

/// Delete the single record at the exact composite key, if present.
pub fn delete_exact(
    conn: &Connection,
    product_id: i64,
    related_product_id: i64,
) -> Result<usize, StoreError> {
    let removed = conn.execute(
        "DELETE FROM recommendations \
         WHERE product_id = ?1 AND related_product_id = ?2",
        params![product_id, related_product_id],
    )?;

    tracing::info!(product_id, related_product_id, removed, "exact delete");
    Ok(removed)
}

/// Delete every record for the subject product that matches the supplied
/// type/status filters.
pub fn delete_matching(
    conn: &Connection,
    product_id: i64,
    filter: &DeleteFilter,
) -> Result<usize, StoreError> {
    let mut sql = String::from("DELETE FROM recommendations WHERE product_id = ?");
    let mut bindings: Vec<Value> = vec![Value::Integer(product_id)];

    if let Some(type_id) = filter.type_id {
        sql.push_str(" AND type_id = ?");
        bindings.push(Value::Integer(type_id));
    }
    if let Some(status) = filter.status {
        sql.push_str(" AND status = ?");
        bindings.push(Value::Integer(status as i64));
    }

    let removed = conn.execute(&sql, params_from_iter(bindings))?;

    tracing::info!(
        product_id,
        type_id = ?filter.type_id,
        status = ?filter.status,
        removed,
        "filtered delete"
    );
    Ok(removed)
}

/// Delete every record where the product is the subject, unconditionally.
pub fn delete_all_for_product(conn: &Connection, product_id: i64) -> Result<usize, StoreError> {
    let removed = conn.execute(
        "DELETE FROM recommendations WHERE product_id = ?1",
        params![product_id],
    )?;

    tracing::info!(product_id, removed, "deleted all records for product");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::store::create::create;
    use crate::store::types::Recommendation;

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

    fn remaining_keys(conn: &Connection) -> Vec<(i64, i64)> {
        conn.prepare(
            "SELECT product_id, related_product_id FROM recommendations \
             ORDER BY product_id, related_product_id",
        )
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
    }

    #[test]
    fn delete_exact_removes_only_the_keyed_record() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 1, true);
        seed(&mut conn, 1, 3, 1, true);

        let removed = delete_exact(&conn, 1, 2).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(remaining_keys(&conn), vec![(1, 3)]);
    }

    #[test]
    fn delete_exact_is_idempotent() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 1, true);

        assert_eq!(delete_exact(&conn, 1, 2).unwrap(), 1);
        assert_eq!(delete_exact(&conn, 1, 2).unwrap(), 0);
    }

    #[test]
    fn delete_matching_scopes_to_status() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 1, true);
        seed(&mut conn, 1, 3, 2, true);
        seed(&mut conn, 1, 4, 3, false);

        let removed = delete_matching(
            &conn,
            1,
            &DeleteFilter {
                status: Some(true),
                ..DeleteFilter::default()
            },
        )
        .unwrap();

        assert_eq!(removed, 2);
        assert_eq!(remaining_keys(&conn), vec![(1, 4)]);
    }

    #[test]
    fn delete_matching_scopes_to_type_and_status() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 2, true);
        seed(&mut conn, 1, 3, 2, false);
        seed(&mut conn, 1, 4, 1, true);

        let removed = delete_matching(
            &conn,
            1,
            &DeleteFilter {
                type_id: Some(2),
                status: Some(true),
            },
        )
        .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(remaining_keys(&conn), vec![(1, 3), (1, 4)]);
    }

    #[test]
    fn delete_matching_leaves_other_products_alone() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 1, true);
        seed(&mut conn, 2, 3, 1, true);

        let removed = delete_matching(
            &conn,
            1,
            &DeleteFilter {
                type_id: Some(1),
                ..DeleteFilter::default()
            },
        )
        .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(remaining_keys(&conn), vec![(2, 3)]);
    }

    #[test]
    fn delete_all_for_product_removes_subject_rows_only() {
        let mut conn = test_db();
        seed(&mut conn, 1, 2, 1, true);
        seed(&mut conn, 1, 3, 2, false);
        // Product 1 as the related side — not a subject row, must survive
        seed(&mut conn, 9, 1, 1, true);

        let removed = delete_all_for_product(&conn, 1).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(remaining_keys(&conn), vec![(9, 1)]);
    }

    #[test]
    fn bulk_deletes_report_zero_on_no_match() {
        let conn = test_db();

        assert_eq!(delete_all_for_product(&conn, 42).unwrap(), 0);
        assert_eq!(
            delete_matching(&conn, 42, &DeleteFilter::default()).unwrap(),
            0
        );
    }
}
