//! Product recommendation relationship service.
//!
//! `recsvc` tracks directed recommendation relationships between two product
//! identifiers — a product and a related product — each carrying a
//! relationship type (up-sell, cross-sell, accessory) and an active/inactive
//! status. The ordered pair is the record's identity: at most one record per
//! pair, and `(1,2)` is distinct from `(2,1)`.
//!
//! The REST surface:
//!
//! | Method | Route | Effect |
//! |--------|-------|--------|
//! | POST | `/recommendations/{id}/{rel_id}` | create (409 on existing key) |
//! | GET | `/recommendations/{id}/{rel_id}` | retrieve |
//! | GET | `/recommendations?product-id=&related-product-id=&type-id=&status=` | search |
//! | PUT | `/recommendations/{id}/{rel_id}` | replace type and status |
//! | PUT | `/recommendations/{id}/{rel_id}/toggle` | invert status |
//! | DELETE | `/recommendations/{id}/{rel_id}` | delete one record |
//! | DELETE | `/recommendations/{id}?type-id=&status=` | delete matching records |
//! | DELETE | `/recommendations/{id}/all` | delete all records for a product |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization, schema, and migrations
//! - [`store`] — The relationship store: records, search, mutation, deletion
//! - [`http`] — axum router, handlers, and the JSON error envelope
//! - [`server`] — serve loop with graceful shutdown

pub mod config;
pub mod db;
pub mod http;
pub mod server;
pub mod store;
