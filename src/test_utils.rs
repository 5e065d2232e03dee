//! Shared test utilities for the inventory tracker.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test items with sensible defaults.

use crate::{
    core::item::{self, ItemFields},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The reference item used throughout the tests.
///
/// # Defaults
/// * `name`: "Widget"
/// * `quantity`: 10
/// * `price`: 2.5
/// * `category`: "Hardware"
#[must_use]
pub fn widget_fields() -> ItemFields {
    ItemFields {
        name: "Widget".to_string(),
        quantity: 10,
        price: 2.5,
        category: "Hardware".to_string(),
    }
}

/// Creates a test item with the widget defaults and the given name.
pub async fn create_test_item(db: &DatabaseConnection, name: &str) -> Result<entities::item::Model> {
    item::create_item(
        db,
        ItemFields {
            name: name.to_string(),
            ..widget_fields()
        },
    )
    .await
}

/// Sets up a complete test environment with one widget in stock.
/// Returns (db, widget) for common test scenarios.
pub async fn setup_with_widget() -> Result<(DatabaseConnection, entities::item::Model)> {
    let db = setup_test_db().await?;
    let widget = item::create_item(&db, widget_fields()).await?;
    Ok((db, widget))
}
