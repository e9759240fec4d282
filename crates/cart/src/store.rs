//! `CartStore`: the shopper's cart and its durable copy.

use chrono::Utc;
use uuid::Uuid;

use sdmart_core::ProductId;
use sdmart_storage::KeyValueStore;

use crate::cart::Cart;
use crate::error::{CartError, CartResult};
use crate::events::{CartCheckedOut, CartCleared, CartEvent, CartEventKind, ItemAdded};
use crate::feed::{CartEventFeed, CartEventReceiver};
use crate::line_item::LineItem;
use crate::persistence;
use crate::snapshot::CartSnapshot;

/// Storage key the cart is kept under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "sdMartCart";

/// Owns the current cart and keeps it in sync with a key-value store.
///
/// Every mutating operation follows the same order:
///
/// 1. validate input and compute the next cart on a copy
/// 2. write the copy to storage
/// 3. swap it in as the current cart
/// 4. publish a `CartEvent`
///
/// If step 1 or 2 fails the current cart is untouched.
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
    key: String,
    cart: Cart,
    feed: CartEventFeed,
}

impl<S> CartStore<S>
where
    S: KeyValueStore,
{
    /// Restore the cart stored under [`DEFAULT_CART_KEY`].
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, DEFAULT_CART_KEY)
    }

    /// Restore the cart stored under `key`.
    ///
    /// Missing, unreadable or invalid data yields an empty cart. This never
    /// fails: a broken stored value is logged and replaced on the next write.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = restore(&store, &key);

        Self {
            store,
            key,
            cart,
            feed: CartEventFeed::new(),
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// A product already in the cart only gains quantity; its name and price
    /// stay as first added.
    pub fn add_item(
        &mut self,
        id: &str,
        name: &str,
        unit_price: f64,
        quantity: u32,
    ) -> CartResult<()> {
        let product_id = ProductId::new(id)?;

        let mut next = self.cart.clone();
        let line_quantity = next.add(product_id.clone(), name, unit_price, quantity)?;
        self.commit(next)?;

        let name = self
            .cart
            .find(&product_id)
            .map(LineItem::name)
            .unwrap_or(name)
            .to_string();
        tracing::info!(product_id = %product_id, quantity, line_quantity, "{name} added to cart.");

        self.publish(CartEvent::ItemAdded(ItemAdded {
            product_id,
            name,
            quantity_added: quantity,
            line_quantity,
            occurred_at: Utc::now(),
        }));
        Ok(())
    }

    /// Add a single unit (one click on "Add to Cart").
    pub fn add_one(&mut self, id: &str, name: &str, unit_price: f64) -> CartResult<()> {
        self.add_item(id, name, unit_price, 1)
    }

    /// Finish the order: capture the total, empty the cart and persist it.
    ///
    /// Returns the total that was charged. An empty cart is rejected with
    /// [`CartError::EmptyCart`] and nothing is written.
    pub fn checkout(&mut self) -> CartResult<f64> {
        if self.cart.is_empty() {
            tracing::debug!("checkout rejected: cart is empty");
            return Err(CartError::EmptyCart);
        }

        let total = self.cart.total();
        let item_count = self.cart.item_count();
        self.commit(Cart::new())?;

        let order_ref = Uuid::now_v7();
        tracing::info!(%order_ref, item_count, total, "checkout completed");

        self.publish(CartEvent::CartCheckedOut(CartCheckedOut {
            order_ref,
            total,
            item_count,
            occurred_at: Utc::now(),
        }));
        Ok(total)
    }

    /// Empty the cart without checking out. Valid on an empty cart.
    pub fn clear(&mut self) -> CartResult<()> {
        let removed_items = self.cart.item_count();
        self.commit(Cart::new())?;

        tracing::info!(removed_items, "cart cleared");
        self.publish(CartEvent::CartCleared(CartCleared {
            removed_items,
            occurred_at: Utc::now(),
        }));
        Ok(())
    }

    fn commit(&mut self, next: Cart) -> CartResult<()> {
        let payload = persistence::encode(&next)?;
        self.store.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, lines = next.len(), "cart persisted");

        self.cart = next;
        Ok(())
    }

    fn publish(&self, event: CartEvent) {
        match self.feed.publish(&event) {
            Ok(delivered) => {
                tracing::trace!(event = %event.kind(), delivered, "cart event published")
            }
            Err(err) => tracing::warn!(event = %event.kind(), "failed to publish cart event: {err}"),
        }
    }
}

impl<S> CartStore<S> {
    /// Sum of `unit_price * quantity`, unrounded.
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Sum of quantities; 0 for an empty cart.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    pub fn lines(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    /// Receive every `CartEvent` published from now on.
    pub fn subscribe(&self) -> CartEventReceiver {
        self.feed.subscribe()
    }

    /// Receive only the given kinds of `CartEvent`.
    pub fn subscribe_to(&self, kinds: &[CartEventKind]) -> CartEventReceiver {
        self.feed.subscribe_to(kinds)
    }
}

fn restore<S: KeyValueStore>(store: &S, key: &str) -> Cart {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored cart, starting empty");
            return Cart::new();
        }
        Err(err) => {
            tracing::warn!(key, "failed to read stored cart, starting empty: {err}");
            return Cart::new();
        }
    };

    match persistence::decode(&raw) {
        Ok(cart) => {
            tracing::debug!(key, lines = cart.len(), "cart restored");
            cart
        }
        Err(err) => {
            tracing::warn!(key, "discarding stored cart: {err}");
            Cart::new()
        }
    }
}
