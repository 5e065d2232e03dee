//! Unified error type for the inventory tracker.
//!
//! Every fallible operation in the crate returns [`Result`]. Client-facing
//! variants (validation, not found, insufficient stock) are mapped to HTTP
//! status codes in [`crate::api::errors`].

use thiserror::Error;

/// All errors produced by the inventory tracker
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A request payload was missing a field, had a wrong type, or broke a field rule
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the problem
        message: String,
    },

    /// A quantity was negative, or zero where a positive amount is required
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// A price was negative or not finite
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// No item exists with the given id
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// A stock withdrawal asked for more units than are on hand
    #[error("Not enough stock available: {available} on hand, {requested} requested")]
    InsufficientStock {
        /// Units currently on hand
        available: i64,
        /// Units the caller tried to remove
        requested: i64,
    },

    /// Failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (binding the listener, reading files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
