use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sdmart_core::ProductId;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product_id: ProductId,
    pub name: String,
    pub quantity_added: u32,
    /// Quantity of the line after the merge.
    pub line_quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartCleared {
    pub removed_items: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCheckedOut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartCheckedOut {
    /// Reference for the simulated order (UUIDv7, time-ordered).
    pub order_ref: Uuid,
    pub total: f64,
    pub item_count: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Something that happened to the cart after it was persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    CartCleared(CartCleared),
    CartCheckedOut(CartCheckedOut),
}

/// Discriminant of a [`CartEvent`], used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartEventKind {
    ItemAdded,
    Cleared,
    CheckedOut,
}

impl CartEventKind {
    pub const ALL: [CartEventKind; 3] = [
        CartEventKind::ItemAdded,
        CartEventKind::Cleared,
        CartEventKind::CheckedOut,
    ];

    /// Stable name for logs (e.g. "cart.item_added").
    pub fn as_str(self) -> &'static str {
        match self {
            CartEventKind::ItemAdded => "cart.item_added",
            CartEventKind::Cleared => "cart.cleared",
            CartEventKind::CheckedOut => "cart.checked_out",
        }
    }
}

impl core::fmt::Display for CartEventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CartEvent {
    pub fn kind(&self) -> CartEventKind {
        match self {
            CartEvent::ItemAdded(_) => CartEventKind::ItemAdded,
            CartEvent::CartCleared(_) => CartEventKind::Cleared,
            CartEvent::CartCheckedOut(_) => CartEventKind::CheckedOut,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
            CartEvent::CartCheckedOut(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_have_stable_names() {
        let names: Vec<&str> = CartEventKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["cart.item_added", "cart.cleared", "cart.checked_out"]);
    }

    #[test]
    fn item_added_reports_kind_and_time() {
        let at = Utc::now();
        let event = CartEvent::ItemAdded(ItemAdded {
            product_id: ProductId::new("p1").unwrap(),
            name: "Widget".to_string(),
            quantity_added: 1,
            line_quantity: 1,
            occurred_at: at,
        });

        assert_eq!(event.kind(), CartEventKind::ItemAdded);
        assert_eq!(event.occurred_at(), at);
    }
}
