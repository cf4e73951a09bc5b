//! Unified error types for the fulfillment system.
//!
//! Rejections carry enough context to tell apart which precondition failed;
//! the surrounding service layer maps them to whatever response codes it
//! chooses. Infrastructure failures wrap the underlying [`sea_orm::DbErr`].

use thiserror::Error;

/// All failure modes of the fulfillment system.
#[derive(Debug, Error)]
pub enum Error {
    #[error("amount must be greater than zero, got {amount}")]
    InvalidAmount { amount: i32 },

    #[error("product {id} not found")]
    ProductNotFound { id: i64 },

    #[error("warehouse {id} not found")]
    WarehouseNotFound { id: i64 },

    #[error("no order for product {product_id} with amount {amount}")]
    OrderNotFound { product_id: i64, amount: i32 },

    #[error("order {order_id} was created after the fulfillment request")]
    StaleRequest { order_id: i64 },

    #[error("order {order_id} is already fulfilled")]
    AlreadyFulfilled { order_id: i64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Whether re-invoking the failed call with the same input can succeed.
    ///
    /// Only infrastructure failures qualify. Typed rejections are terminal:
    /// they describe caller input or store state that a retry with the same
    /// request cannot change.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
