//! Item services - CRUD endpoints for `/items`

use crate::core::{AppError, AppJson, AppPath, AppQuery, AppState};
use crate::dtos::{CreateItemDTO, ItemDTO, ListItemsQuery, UpdateItemDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

const ITEM_NOT_FOUND: &str = "Item not found";

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Items in insertion order", body = [ItemDTO]),
        (status = 422, description = "Invalid pagination parameters", body = crate::core::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<ListItemsQuery>, // /items?skip=0&limit=100
) -> Result<Json<Vec<ItemDTO>>, AppError> {
    debug!("Listing items");
    let items = state.item.list(query.offset(), query.limit()).await?;
    info!("Returning {} items", items.len());
    Ok(Json(items.into_iter().map(ItemDTO::from).collect()))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = ItemDTO),
        (status = 404, description = "Item not found", body = crate::core::ErrorResponse),
        (status = 422, description = "Malformed id", body = crate::core::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ItemDTO>, AppError> {
    debug!("Fetching item by id");
    let item = state.item.read(&id).await?.ok_or_else(|| {
        warn!("Item not found");
        AppError::not_found(ITEM_NOT_FOUND)
    })?;
    Ok(Json(ItemDTO::from(item)))
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemDTO,
    responses(
        (status = 201, description = "Item created", body = ItemDTO),
        (status = 422, description = "Validation error", body = crate::core::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<CreateItemDTO>,
) -> Result<(StatusCode, Json<ItemDTO>), AppError> {
    body.validate()?;

    let item = state.item.create(&body).await?;
    info!("Created item {}", item.id);
    Ok((StatusCode::CREATED, Json(ItemDTO::from(item))))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = UpdateItemDTO,
    responses(
        (status = 200, description = "Item updated", body = ItemDTO),
        (status = 404, description = "Item not found", body = crate::core::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::core::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<UpdateItemDTO>,
) -> Result<Json<ItemDTO>, AppError> {
    body.validate()?;
    if body.is_empty() {
        debug!("Empty update, nothing to change");
    }

    let item = state.item.update(&id, &body).await?.ok_or_else(|| {
        warn!("Item not found");
        AppError::not_found(ITEM_NOT_FOUND)
    })?;
    Ok(Json(ItemDTO::from(item)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = crate::core::ErrorResponse),
        (status = 422, description = "Malformed id", body = crate::core::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    if state.item.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        warn!("Item not found");
        Err(AppError::not_found(ITEM_NOT_FOUND))
    }
}
