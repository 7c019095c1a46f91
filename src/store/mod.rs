//! The relationship store: canonical records and the query engine.
//!
//! All operations are synchronous functions over a [`rusqlite::Connection`].
//! Callers own the sharing model (the HTTP layer wraps one connection in an
//! `Arc<Mutex<_>>` and calls in from blocking tasks); every multi-step
//! mutation runs inside a transaction so readers never observe a record
//! mid-update.

pub mod create;
pub mod delete;
pub mod error;
pub mod query;
pub mod stats;
pub mod types;
pub mod update;

pub use create::create;
pub use delete::{delete_all_for_product, delete_exact, delete_matching};
pub use error::StoreError;
pub use query::{retrieve, search};
pub use stats::{stats, StoreStats};
pub use types::{DeleteFilter, Recommendation, RelationshipType, SearchFilter};
pub use update::{toggle, update};
