//! Transaction log queries.
//!
//! Log entries are written only by [`crate::core::stock::adjust_stock`]; this module
//! just reads them back. Results are ordered by id, which is creation order.

use crate::{
    entities::{Transaction, transaction},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use tracing::instrument;

/// Retrieves every transaction, oldest first.
#[instrument(skip(db))]
pub async fn list_transactions(db: &DatabaseConnection) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the transactions recorded for one item, oldest first.
///
/// Entries are returned even if the item itself has since been deleted.
#[instrument(skip(db))]
pub async fn list_transactions_for_item(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .filter(transaction::Column::ItemId.eq(item_id))
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
