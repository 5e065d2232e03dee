//! Request/response DTOs and mapping to/from domain types.

use serde::{Deserialize, Serialize};

use crate::core::{item::ItemFields, stock::StockAdjustment};
use crate::entities::{TransactionType, item, transaction};

/// Timestamp format used for transaction dates on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items` and `PUT /items/:id`; every field is required.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    /// Display name
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
    /// Category label
    pub category: String,
}

impl From<ItemRequest> for ItemFields {
    fn from(body: ItemRequest) -> Self {
        Self {
            name: body.name,
            quantity: body.quantity,
            price: body.price,
            category: body.category,
        }
    }
}

/// Body of `POST /items/:id/in` and `POST /items/:id/out`.
#[derive(Debug, Deserialize)]
pub struct StockRequest {
    /// Units to move, must be positive
    pub quantity: i64,
}

// -------------------------
// Response DTOs
// -------------------------

/// Plain `{message}` body, used by `DELETE /items/:id`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

/// Transaction log entry as sent to clients, with the date pre-formatted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResponse {
    /// Log entry id
    pub id: i64,
    /// Item the movement applies to
    pub item_id: i64,
    /// Units moved
    pub quantity: i64,
    /// `"in"` or `"out"`
    pub transaction_type: TransactionType,
    /// UTC time formatted with [`DATE_FORMAT`]
    pub date: String,
}

impl From<transaction::Model> for TransactionResponse {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id,
            item_id: model.item_id,
            quantity: model.quantity,
            transaction_type: model.transaction_type,
            date: model.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Body of a successful stock in/out.
#[derive(Debug, Serialize)]
pub struct StockAdjustmentResponse {
    /// Summary such as "Removed 4 units from Widget. New total: 6"
    pub message: String,
    /// The item after the adjustment
    pub item: item::Model,
    /// The recorded log entry
    pub transaction: TransactionResponse,
}

impl From<StockAdjustment> for StockAdjustmentResponse {
    fn from(adjustment: StockAdjustment) -> Self {
        let StockAdjustment { item, transaction } = adjustment;
        let message = match transaction.transaction_type {
            TransactionType::In => format!(
                "Added {} units to {}. New total: {}",
                transaction.quantity, item.name, item.quantity
            ),
            TransactionType::Out => format!(
                "Removed {} units from {}. New total: {}",
                transaction.quantity, item.name, item.quantity
            ),
        };
        Self {
            message,
            item,
            transaction: transaction.into(),
        }
    }
}

/// Maps log rows to their wire form, keeping order.
pub fn transactions_to_json(models: Vec<transaction::Model>) -> Vec<TransactionResponse> {
    models.into_iter().map(Into::into).collect()
}
