//! Stock adjustment - Moves item quantity and records the movement in one unit of work.
//!
//! Each adjustment runs inside a database transaction: the quantity change is a single
//! conditional `UPDATE` (`quantity = quantity - q WHERE quantity >= q` for withdrawals),
//! followed by the insert of the log entry, followed by commit. If any step fails the
//! transaction is dropped and rolled back, so the item and the log never disagree.
//! Because the stock check lives in the `WHERE` clause, two concurrent withdrawals
//! cannot both pass it against the same on-hand quantity.

use crate::{
    entities::{Item, TransactionType, item, transaction},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{info, instrument, warn};

/// Outcome of a successful stock adjustment
#[derive(Clone, Debug, PartialEq)]
pub struct StockAdjustment {
    /// The item after the adjustment
    pub item: item::Model,
    /// The log entry recorded for the adjustment
    pub transaction: transaction::Model,
}

/// Adds (`In`) or removes (`Out`) `quantity` units of an item and logs the movement.
///
/// # Errors
/// Returns an error if:
/// - `quantity` is not positive ([`Error::InvalidQuantity`])
/// - The item does not exist ([`Error::ItemNotFound`])
/// - A withdrawal exceeds the on-hand quantity ([`Error::InsufficientStock`])
/// - A receipt would overflow the stored quantity ([`Error::Validation`])
/// - Any database operation fails; nothing is persisted in that case
#[instrument(skip(db))]
pub async fn adjust_stock(
    db: &DatabaseConnection,
    item_id: i64,
    quantity: i64,
    direction: TransactionType,
) -> Result<StockAdjustment> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let txn = db.begin().await?;

    let current = Item::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let delta = match direction {
        TransactionType::In => {
            if current.quantity.checked_add(quantity).is_none() {
                return Err(Error::Validation {
                    message: format!("Adding {quantity} units would overflow the stock count"),
                });
            }
            quantity
        }
        TransactionType::Out => -quantity,
    };

    let mut update = Item::update_many()
        .col_expr(
            item::Column::Quantity,
            Expr::col(item::Column::Quantity).add(delta),
        )
        .filter(item::Column::Id.eq(item_id));
    if direction == TransactionType::Out {
        update = update.filter(item::Column::Quantity.gte(quantity));
    }

    if update.exec(&txn).await?.rows_affected == 0 {
        let available = Item::find_by_id(item_id)
            .one(&txn)
            .await?
            .ok_or(Error::ItemNotFound { id: item_id })?
            .quantity;
        warn!(item_id, available, requested = quantity, "Rejected stock withdrawal");
        return Err(Error::InsufficientStock {
            available,
            requested: quantity,
        });
    }

    let logged = transaction::ActiveModel {
        item_id: Set(item_id),
        quantity: Set(quantity),
        transaction_type: Set(direction),
        date: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let item = Item::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    txn.commit().await?;

    info!(
        item_id,
        transaction_id = logged.id,
        direction = direction.as_str(),
        quantity,
        new_quantity = item.quantity,
        "Adjusted stock"
    );

    Ok(StockAdjustment {
        item,
        transaction: logged,
    })
}
