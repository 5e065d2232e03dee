//! Item business logic - Handles all item-related operations.
//!
//! This module is the item repository: it lists, fetches, creates, replaces and deletes
//! items. Every write goes through [`ItemFields::validate`] first, so invalid input is
//! rejected before the database is touched. All functions are async and return Result
//! types for proper error handling throughout the system.

use crate::{
    entities::{Item, item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Longest accepted item name, in characters
pub const MAX_NAME_LEN: usize = 80;
/// Longest accepted category, in characters
pub const MAX_CATEGORY_LEN: usize = 50;

/// The full set of user-editable item fields, required on both create and update.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFields {
    /// Display name
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
    /// Category label
    pub category: String,
}

impl ItemFields {
    /// Checks every field rule.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name or category is empty, whitespace-only, or too long
    /// - The quantity is negative
    /// - The price is negative or not finite (NaN, infinity)
    pub fn validate(&self) -> Result<()> {
        check_text("Item name", &self.name, MAX_NAME_LEN)?;
        check_text("Category", &self.category, MAX_CATEGORY_LEN)?;

        if self.quantity < 0 {
            return Err(Error::InvalidQuantity {
                quantity: self.quantity,
            });
        }

        if self.price < 0.0 || !self.price.is_finite() {
            return Err(Error::InvalidPrice { price: self.price });
        }

        Ok(())
    }
}

fn check_text(label: &str, value: &str, max_len: usize) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: format!("{label} cannot be empty"),
        });
    }
    if trimmed.chars().count() > max_len {
        return Err(Error::Validation {
            message: format!("{label} cannot be longer than {max_len} characters"),
        });
    }
    Ok(())
}

/// Retrieves all items, ordered by id (creation order).
#[instrument(skip(db))]
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<item::Model>> {
    Item::find()
        .order_by_asc(item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific item by its unique ID.
///
/// # Errors
/// Returns [`Error::ItemNotFound`] if no item has this id, or an error if the query fails.
#[instrument(skip(db))]
pub async fn get_item(db: &DatabaseConnection, item_id: i64) -> Result<item::Model> {
    Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })
}

/// Creates a new item after validating its fields. Name and category are trimmed.
///
/// # Errors
/// Returns an error if validation fails or the database insert fails.
#[instrument(skip(db))]
pub async fn create_item(db: &DatabaseConnection, fields: ItemFields) -> Result<item::Model> {
    fields.validate()?;

    let item = item::ActiveModel {
        name: Set(fields.name.trim().to_string()),
        quantity: Set(fields.quantity),
        price: Set(fields.price),
        category: Set(fields.category.trim().to_string()),
        ..Default::default()
    };
    let created = item.insert(db).await?;
    info!(item_id = created.id, "Created item");
    Ok(created)
}

/// Replaces every field of an existing item.
///
/// # Errors
/// Returns an error if:
/// - Validation fails
/// - The item does not exist
/// - The database update operation fails
#[instrument(skip(db))]
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    fields: ItemFields,
) -> Result<item::Model> {
    fields.validate()?;

    let mut item: item::ActiveModel = get_item(db, item_id).await?.into();
    item.name = Set(fields.name.trim().to_string());
    item.quantity = Set(fields.quantity);
    item.price = Set(fields.price);
    item.category = Set(fields.category.trim().to_string());

    let updated = item.update(db).await?;
    info!(item_id, "Updated item");
    Ok(updated)
}

/// Permanently deletes an item. Its transaction log entries are left in place.
///
/// # Errors
/// Returns [`Error::ItemNotFound`] if nothing was deleted, or an error if the query fails.
#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = Item::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ItemNotFound { id: item_id });
    }
    info!(item_id, "Deleted item");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_item_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        // Test empty name validation
        let mut fields = widget_fields();
        fields.name = String::new();
        let result = create_item(&db, fields).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        // Test whitespace-only category validation
        let mut fields = widget_fields();
        fields.category = "   ".to_string();
        let result = create_item(&db, fields).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        // Test over-long name validation
        let mut fields = widget_fields();
        fields.name = "x".repeat(MAX_NAME_LEN + 1);
        let result = create_item(&db, fields).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        // Test negative quantity validation
        let mut fields = widget_fields();
        fields.quantity = -1;
        let result = create_item(&db, fields).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: -1 }
        ));

        // Test negative price validation
        let mut fields = widget_fields();
        fields.price = -2.5;
        let result = create_item(&db, fields).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPrice { price: _ }
        ));

        // Test NaN price validation
        let mut fields = widget_fields();
        fields.price = f64::NAN;
        let result = create_item(&db, fields).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPrice { price: _ }
        ));

        Ok(())
    }

    #[test]
    fn test_zero_quantity_and_price_are_valid() {
        let fields = ItemFields {
            quantity: 0,
            price: 0.0,
            ..widget_fields()
        };
        assert!(fields.validate().is_ok());
    }

    #[tokio::test]
    async fn test_create_item_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_item(&db, widget_fields()).await?;

        assert!(item.id > 0);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 10);
        assert_eq!(item.price, 2.5);
        assert_eq!(item.category, "Hardware");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_trims_text() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_item(
            &db,
            ItemFields {
                name: "  Bolt ".to_string(),
                category: " Fasteners  ".to_string(),
                ..widget_fields()
            },
        )
        .await?;

        assert_eq!(item.name, "Bolt");
        assert_eq!(item.category, "Fasteners");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_assigns_unique_ids() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_item(&db, "Widget").await?;
        let second = create_test_item(&db, "Gadget").await?;
        assert_ne!(first.id, second.id);

        let items = list_items(&db).await?;
        assert_eq!(items, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_item_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_item(&db, 999).await;
        assert!(matches!(result.unwrap_err(), Error::ItemNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_replaces_every_field() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Widget").await?;

        let updated = update_item(
            &db,
            item.id,
            ItemFields {
                name: "Sprocket".to_string(),
                quantity: 3,
                price: 7.25,
                category: "Parts".to_string(),
            },
        )
        .await?;

        assert_eq!(updated.id, item.id);

        // Verify the update persisted
        let retrieved = get_item(&db, item.id).await?;
        assert_eq!(retrieved, updated);
        assert_eq!(retrieved.name, "Sprocket");
        assert_eq!(retrieved.quantity, 3);
        assert_eq!(retrieved.price, 7.25);
        assert_eq!(retrieved.category, "Parts");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_item(&db, 42, widget_fields()).await;
        assert!(matches!(result.unwrap_err(), Error::ItemNotFound { id: 42 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_validation_leaves_item_unchanged() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Widget").await?;

        let result = update_item(
            &db,
            item.id,
            ItemFields {
                quantity: -5,
                ..widget_fields()
            },
        )
        .await;
        assert!(result.is_err());

        assert_eq!(get_item(&db, item.id).await?, item);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let keep = create_test_item(&db, "Keep").await?;
        let remove = create_test_item(&db, "Remove").await?;

        delete_item(&db, remove.id).await?;

        let items = list_items(&db).await?;
        assert_eq!(items, vec![keep]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_not_found_leaves_items() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Widget").await?;

        let result = delete_item(&db, item.id + 100).await;
        assert!(matches!(result.unwrap_err(), Error::ItemNotFound { id: _ }));

        assert_eq!(list_items(&db).await?, vec![item]);
        Ok(())
    }
}
