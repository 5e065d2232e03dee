//! Core business logic - framework-agnostic item, stock and transaction operations.
//!
//! Nothing in here knows about HTTP; handlers in [`crate::api`] call these functions
//! and translate their results.

/// Item repository: list, get, create, update, delete
pub mod item;
/// Stock adjustments that move quantity and append to the transaction log atomically
pub mod stock;
/// Read access to the transaction log
pub mod transaction;
