use thiserror::Error;

use sdmart_core::DomainError;
use sdmart_storage::StoreError;

pub type CartResult<T> = Result<T, CartError>;

/// Cart-level error.
#[derive(Debug, Error)]
pub enum CartError {
    /// Checkout was attempted with zero items.
    #[error("cart is empty")]
    EmptyCart,

    /// An item was rejected before touching the cart.
    #[error("invalid item: {0}")]
    InvalidItem(#[from] DomainError),

    /// Stored cart data could not be decoded or failed validation.
    #[error("persisted cart is corrupt: {0}")]
    PersistenceCorrupt(String),

    /// The backing store failed; the in-memory cart was left unchanged.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl CartError {
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::PersistenceCorrupt(msg.into())
    }
}
