//! Items CRUD API - library crate, exposes the modules to `main` and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items CRUD API",
        version = "1.0.0",
        description = "API pour gérer une liste d'articles"
    ),
    paths(
        services::item::list_items,
        services::item::get_item,
        services::item::create_item,
        services::item::update_item,
        services::item::delete_item
    ),
    components(schemas(
        dtos::ItemDTO,
        dtos::CreateItemDTO,
        dtos::UpdateItemDTO,
        crate::core::ErrorResponse,
        crate::core::FieldError
    )),
    tags((name = "items", description = "Items management"))
)]
pub struct ApiDoc;

/// Builds the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::{health, openapi, root};

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi))
        .merge(configure_item_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes for the item resource, the collection answers with and without trailing slash
fn configure_item_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
}
