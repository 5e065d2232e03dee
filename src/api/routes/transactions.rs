use axum::{Extension, Json, extract::Path};
use tracing::instrument;

use super::IdPath;
use crate::api::{AppState, dto};
use crate::core::transaction;
use crate::errors::Result;

/// `GET /transactions`
#[instrument(skip(state))]
pub async fn list_transactions(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<dto::TransactionResponse>>> {
    let log = transaction::list_transactions(&state.database).await?;
    Ok(Json(dto::transactions_to_json(log)))
}

/// `GET /items/:id/transactions`
#[instrument(skip(state, id))]
pub async fn list_item_transactions(
    Extension(state): Extension<AppState>,
    id: IdPath,
) -> Result<Json<Vec<dto::TransactionResponse>>> {
    let Path(id) = id?;
    let log = transaction::list_transactions_for_item(&state.database, id).await?;
    Ok(Json(dto::transactions_to_json(log)))
}
