//! HTTP layer: the axum router and its handlers.
//!
//! Thin plumbing over the store — handlers validate and sanitize inputs,
//! dispatch one store call on the blocking pool, and render the result.

pub mod error;
pub mod handlers;

use axum::routing::{delete, get, post, put};
use axum::Router;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Shared state for all request handlers: one connection to the backing
/// store, serialized behind a mutex (store calls are short, synchronous
/// units of work run via `spawn_blocking`).
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Build the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(handlers::healthcheck))
        .route("/stats", get(handlers::stats))
        .route("/recommendations", get(handlers::search))
        .route(
            "/recommendations/{product_id}",
            delete(handlers::delete_filtered),
        )
        .route(
            "/recommendations/{product_id}/all",
            delete(handlers::delete_all),
        )
        .route(
            "/recommendations/{product_id}/{related_product_id}",
            post(handlers::create)
                .get(handlers::retrieve)
                .put(handlers::update)
                .delete(handlers::delete_exact),
        )
        .route(
            "/recommendations/{product_id}/{related_product_id}/toggle",
            put(handlers::toggle),
        )
        .with_state(state)
}
