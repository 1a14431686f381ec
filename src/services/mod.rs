//! Services module - HTTP handlers
//!
//! Each sub-module handles the endpoints of one resource.

pub mod item;

// Re-exports per facilitare l'import
pub use item::{create_item, delete_item, get_item, list_items, update_item};

use crate::ApiDoc;
use axum::Json;
use serde_json::{Value, json};
use utoipa::OpenApi;

/// Root endpoint
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Items CRUD API" }))
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// OpenAPI document of the API
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
