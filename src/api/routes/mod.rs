use axum::{
    Router,
    extract::{Path, rejection::PathRejection},
    routing::{get, post},
};

/// Item CRUD handlers
pub mod items;
/// Stock in/out handlers
pub mod stock;
/// Liveness check
pub mod system;
/// Transaction log handlers
pub mod transactions;

/// Numeric `:id` path segment; a parse failure becomes a JSON validation error.
pub type IdPath = std::result::Result<Path<i64>, PathRejection>;

/// Router for every API endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/items/:id/in", post(stock::stock_in))
        .route("/items/:id/out", post(stock::stock_out))
        .route(
            "/items/:id/transactions",
            get(transactions::list_item_transactions),
        )
        .route("/transactions", get(transactions::list_transactions))
}
