//! # Request Handlers
//!
//! Thin translation layer: transport requests in, coordinator calls
//! out, JSON payloads back. No business branching lives here.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::version;
use catalog_persistence::{CatalogCoordinator, HealthAggregator};

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogCoordinator>,
    pub health: Arc<HealthAggregator>,
}

/// Body for create/update requests.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

/// `GET /` — service info.
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Catalog API",
        "version": version::tag(),
        "status": "healthy",
        "components": ["axum", "postgresql", "redis"],
        "features": ["Products API", "Redis Caching", "Health Monitoring"],
    }))
}

/// `GET /products` — full catalog, tagged with its origin.
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let (items, origin) = state.catalog.list_products().await?;

    Ok(Json(json!({
        "version": version::tag(),
        "source": origin,
        "data": items,
    })))
}

/// `POST /products` — create a product.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(input) = payload?;
    let id = state.catalog.create_product(&input.name, input.price).await?;

    Ok(Json(json!({
        "message": "Product added",
        "id": id,
        "version": version::tag(),
    })))
}

/// `PUT /products/{id}` — replace a product's name and price.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(input) = payload?;
    state
        .catalog
        .update_product(id, &input.name, input.price)
        .await?;

    Ok(Json(json!({
        "message": "Product updated",
        "id": id,
        "version": version::tag(),
    })))
}

/// `DELETE /products/{id}` — delete a product.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    state.catalog.delete_product(id).await?;

    Ok(Json(json!({
        "message": "Product deleted",
        "id": id,
        "version": version::tag(),
    })))
}

/// `GET /health` — composite liveness of both dependencies.
///
/// Always a normal response: 200 when both probes pass, 500 with the
/// captured error otherwise.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.health.check().await;

    if report.is_healthy() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "version": version::tag(),
                "database": "connected",
                "redis": "connected",
            })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "unhealthy",
                "error": report.error,
                "version": version::tag(),
            })),
        )
    }
}
