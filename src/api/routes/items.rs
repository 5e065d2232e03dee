use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;

use super::IdPath;
use crate::api::{AppState, dto};
use crate::core::item;
use crate::entities::ItemModel;
use crate::errors::Result;

/// `GET /items`
#[instrument(skip(state))]
pub async fn list_items(Extension(state): Extension<AppState>) -> Result<Json<Vec<ItemModel>>> {
    Ok(Json(item::list_items(&state.database).await?))
}

/// `GET /items/:id`
#[instrument(skip(state, id))]
pub async fn get_item(Extension(state): Extension<AppState>, id: IdPath) -> Result<Json<ItemModel>> {
    let Path(id) = id?;
    Ok(Json(item::get_item(&state.database, id).await?))
}

/// `POST /items`
#[instrument(skip(state, payload))]
pub async fn create_item(
    Extension(state): Extension<AppState>,
    payload: std::result::Result<Json<dto::ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemModel>)> {
    let Json(body) = payload?;
    let created = item::create_item(&state.database, body.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /items/:id`
#[instrument(skip(state, id, payload))]
pub async fn update_item(
    Extension(state): Extension<AppState>,
    id: IdPath,
    payload: std::result::Result<Json<dto::ItemRequest>, JsonRejection>,
) -> Result<Json<ItemModel>> {
    let Path(id) = id?;
    let Json(body) = payload?;
    Ok(Json(
        item::update_item(&state.database, id, body.into()).await?,
    ))
}

/// `DELETE /items/:id`
#[instrument(skip(state, id))]
pub async fn delete_item(
    Extension(state): Extension<AppState>,
    id: IdPath,
) -> Result<Json<dto::MessageResponse>> {
    let Path(id) = id?;
    item::delete_item(&state.database, id).await?;
    Ok(Json(dto::MessageResponse {
        message: "Item deleted".to_string(),
    }))
}
