//! Transaction entity - Immutable log of stock movements.
//!
//! Each transaction records the `item_id` it applies to, the quantity moved,
//! the `transaction_type` (`"in"` or `"out"`) and the server-assigned `date`.
//! Rows are only ever inserted, never updated or deleted.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a stock movement
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Units received into stock
    #[sea_orm(string_value = "in")]
    In,
    /// Units withdrawn from stock
    #[sea_orm(string_value = "out")]
    Out,
}

impl TransactionType {
    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the item whose stock moved
    #[sea_orm(indexed)]
    pub item_id: i64,
    /// Units moved, always positive
    pub quantity: i64,
    /// Whether stock went in or out
    pub transaction_type: TransactionType,
    /// When the movement was recorded
    pub date: DateTimeUtc,
}

/// The item link is a plain id reference, see [`super::item::Relation`].
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
