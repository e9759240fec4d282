//! Shopping cart domain module.
//!
//! `CartStore` owns the shopper's cart: an ordered list of line items backed by
//! a durable key-value store. Every mutation is validated, persisted, and only
//! then applied in memory, so the cart is never left half-updated.

pub mod cart;
pub mod error;
pub mod events;
pub mod feed;
pub mod line_item;
pub mod persistence;
pub mod snapshot;
pub mod store;

pub use cart::Cart;
pub use error::{CartError, CartResult};
pub use events::{CartCheckedOut, CartCleared, CartEvent, CartEventKind, ItemAdded};
pub use feed::{CartEventFeed, CartEventReceiver, FeedError};
pub use line_item::LineItem;
pub use snapshot::{CartSnapshot, SnapshotLine};
pub use store::{CartStore, DEFAULT_CART_KEY};
