//! Store error taxonomy.
//!
//! Exact single-key operations (retrieve, update, toggle) fail with
//! [`StoreError::NotFound`]; create fails with [`StoreError::Conflict`] when
//! the key already exists. Search and bulk delete never raise either — an
//! empty match is a normal outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the requested composite key. Carries both ids so
    /// callers can render a message naming them.
    #[error("no recommendation for product id {product_id} with related product id {related_product_id}")]
    NotFound {
        product_id: i64,
        related_product_id: i64,
    },

    /// A record already exists for the composite key; create is not an upsert.
    #[error("recommendation for product id {product_id} with related product id {related_product_id} already exists")]
    Conflict {
        product_id: i64,
        related_product_id: i64,
    },

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn not_found(product_id: i64, related_product_id: i64) -> Self {
        Self::NotFound {
            product_id,
            related_product_id,
        }
    }

    pub fn conflict(product_id: i64, related_product_id: i64) -> Self {
        Self::Conflict {
            product_id,
            related_product_id,
        }
    }
}
