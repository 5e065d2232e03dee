//! Item entity - A stocked inventory record.
//!
//! Each item has a name, an on-hand quantity, a unit price and a category.
//! The quantity is only ever changed through a full update or a stock adjustment,
//! and it never drops below zero.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the item (e.g., "Widget")
    pub name: String,
    /// Units currently in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
    /// Grouping used by the client (e.g., "Hardware")
    pub category: String,
}

/// Items own no relations; transactions point at them by id only, so deleting
/// an item never cascades into or is blocked by the transaction log.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
