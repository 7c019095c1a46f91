//! Request handlers for the recommendation routes.
//!
//! Boundary rules live here, not in the store: ids must be positive, a
//! product cannot recommend itself, and `type-id` is sanitized (absent or
//! zero collapses to the up-sell default on create) then checked against the
//! closed enumeration. The store only ever sees explicit, validated values.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::http::error::ApiError;
use crate::http::AppState;
use crate::store::{
    self, DeleteFilter, Recommendation, RelationshipType, SearchFilter, StoreError,
};

const DEFAULT_TYPE: RelationshipType = RelationshipType::UpSell;

#[derive(Debug, Deserialize)]
pub struct CreateBody {
    #[serde(rename = "type-id")]
    pub type_id: Option<i64>,
    pub status: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    #[serde(rename = "type-id")]
    pub type_id: i64,
    pub status: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "product-id")]
    pub product_id: Option<i64>,
    #[serde(rename = "related-product-id")]
    pub related_product_id: Option<i64>,
    #[serde(rename = "type-id")]
    pub type_id: Option<i64>,
    pub status: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "type-id")]
    pub type_id: Option<i64>,
    pub status: Option<bool>,
}

/// Run a store call on the blocking pool against the shared connection.
async fn with_conn<T, F>(db: Arc<Mutex<Connection>>, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = db
            .lock()
            .map_err(|e| ApiError::internal(format!("db lock poisoned: {e}")))?;
        f(&mut conn).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::internal(format!("db task failed: {e}")))?
}

fn require_positive(value: i64, name: &str) -> Result<(), ApiError> {
    if value <= 0 {
        return Err(ApiError::bad_request(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(())
}

fn validate_key(product_id: i64, related_product_id: i64) -> Result<(), ApiError> {
    require_positive(product_id, "product-id")?;
    require_positive(related_product_id, "related-product-id")
}

/// Create-only sanitization: an absent or zero `type-id` collapses to the
/// default before the range check.
fn sanitize_type(type_id: Option<i64>) -> Result<i64, ApiError> {
    let code = match type_id {
        None | Some(0) => DEFAULT_TYPE.code(),
        Some(code) => code,
    };
    validate_type(code)
}

fn validate_type(code: i64) -> Result<i64, ApiError> {
    if RelationshipType::from_code(code).is_none() {
        return Err(ApiError::bad_request(format!(
            "type-id {code} is not a known relationship type"
        )));
    }
    Ok(code)
}

fn validate_type_filter(type_id: Option<i64>) -> Result<Option<i64>, ApiError> {
    type_id.map(validate_type).transpose()
}

pub async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": 200, "message": "Healthy" }))
}

pub async fn create(
    State(state): State<AppState>,
    Path((product_id, related_product_id)): Path<(i64, i64)>,
    Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError> {
    validate_key(product_id, related_product_id)?;
    if product_id == related_product_id {
        return Err(ApiError::bad_request(
            "product-id cannot be the same as related-product-id",
        ));
    }
    let type_id = sanitize_type(body.type_id)?;

    let record = Recommendation {
        product_id,
        related_product_id,
        type_id,
        status: body.status,
    };
    let stored = with_conn(Arc::clone(&state.db), move |conn| {
        store::create(conn, &record)
    })
    .await?;

    let location = format!("/recommendations/{product_id}/{related_product_id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(stored),
    ))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path((product_id, related_product_id)): Path<(i64, i64)>,
) -> Result<Json<Recommendation>, ApiError> {
    validate_key(product_id, related_product_id)?;

    let record = with_conn(Arc::clone(&state.db), move |conn| {
        store::retrieve(conn, product_id, related_product_id)
    })
    .await?;
    Ok(Json(record))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let filter = SearchFilter {
        product_id: params.product_id,
        related_product_id: params.related_product_id,
        type_id: validate_type_filter(params.type_id)?,
        status: params.status,
    };

    let records = with_conn(Arc::clone(&state.db), move |conn| {
        store::search(conn, &filter)
    })
    .await?;
    Ok(Json(records))
}

pub async fn update(
    State(state): State<AppState>,
    Path((product_id, related_product_id)): Path<(i64, i64)>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<Recommendation>, ApiError> {
    validate_key(product_id, related_product_id)?;
    let type_id = validate_type(body.type_id)?;

    let record = Recommendation {
        product_id,
        related_product_id,
        type_id,
        status: body.status,
    };
    let updated = with_conn(Arc::clone(&state.db), move |conn| {
        store::update(conn, &record)
    })
    .await?;
    Ok(Json(updated))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path((product_id, related_product_id)): Path<(i64, i64)>,
) -> Result<Json<Recommendation>, ApiError> {
    validate_key(product_id, related_product_id)?;

    let record = with_conn(Arc::clone(&state.db), move |conn| {
        store::toggle(conn, product_id, related_product_id)
    })
    .await?;
    Ok(Json(record))
}

pub async fn delete_exact(
    State(state): State<AppState>,
    Path((product_id, related_product_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    validate_key(product_id, related_product_id)?;

    with_conn(Arc::clone(&state.db), move |conn| {
        store::delete_exact(conn, product_id, related_product_id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Filtered delete requires at least one filter; deleting everything for a
/// product is only reachable through the dedicated `/all` route, so a
/// malformed request can never widen into a mass deletion.
pub async fn delete_filtered(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    require_positive(product_id, "product-id")?;
    if params.type_id.is_none() && params.status.is_none() {
        return Err(ApiError::bad_request(
            "must provide at least one of type-id or status",
        ));
    }
    let filter = DeleteFilter {
        type_id: validate_type_filter(params.type_id)?,
        status: params.status,
    };

    with_conn(Arc::clone(&state.db), move |conn| {
        store::delete_matching(conn, product_id, &filter)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    require_positive(product_id, "product-id")?;

    with_conn(Arc::clone(&state.db), move |conn| {
        store::delete_all_for_product(conn, product_id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = with_conn(Arc::clone(&state.db), |conn| store::stats(conn)).await?;
    Ok(Json(stats))
}
