use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
};
use tracing::instrument;

use super::IdPath;
use crate::api::{AppState, dto};
use crate::core::stock::adjust_stock;
use crate::entities::TransactionType;
use crate::errors::Result;

type StockPayload = std::result::Result<Json<dto::StockRequest>, JsonRejection>;

/// `POST /items/:id/in`
#[instrument(skip(state, id, payload))]
pub async fn stock_in(
    Extension(state): Extension<AppState>,
    id: IdPath,
    payload: StockPayload,
) -> Result<Json<dto::StockAdjustmentResponse>> {
    adjust(&state, id, payload, TransactionType::In).await
}

/// `POST /items/:id/out`
#[instrument(skip(state, id, payload))]
pub async fn stock_out(
    Extension(state): Extension<AppState>,
    id: IdPath,
    payload: StockPayload,
) -> Result<Json<dto::StockAdjustmentResponse>> {
    adjust(&state, id, payload, TransactionType::Out).await
}

async fn adjust(
    state: &AppState,
    id: IdPath,
    payload: StockPayload,
    direction: TransactionType,
) -> Result<Json<dto::StockAdjustmentResponse>> {
    let Path(id) = id?;
    let Json(body) = payload?;
    let adjustment = adjust_stock(&state.database, id, body.quantity, direction).await?;
    Ok(Json(adjustment.into()))
}
