//! Wire format of the persisted cart.
//!
//! The cart is stored as a JSON array of line records:
//!
//! ```text
//! [{"id":"p1","name":"Widget","price":9.99,"quantity":2}, ...]
//! ```
//!
//! Decoding is strict: anything that does not describe a valid cart is
//! rejected as a whole rather than partially restored.

use serde::{Deserialize, Serialize};

use sdmart_core::{Entity, ProductId};
use sdmart_storage::StoreError;

use crate::cart::Cart;
use crate::error::{CartError, CartResult};
use crate::line_item::LineItem;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedLine {
    id: ProductId,
    name: String,
    price: f64,
    quantity: u32,
}

impl From<&LineItem> for PersistedLine {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id().clone(),
            name: item.name().to_string(),
            price: item.unit_price(),
            quantity: item.quantity(),
        }
    }
}

/// Serialize a cart to its stored JSON form.
pub fn encode(cart: &Cart) -> CartResult<String> {
    let lines: Vec<PersistedLine> = cart.items().iter().map(PersistedLine::from).collect();
    Ok(serde_json::to_string(&lines).map_err(StoreError::from)?)
}

/// Parse and validate a stored cart.
pub fn decode(raw: &str) -> CartResult<Cart> {
    let lines: Vec<PersistedLine> =
        serde_json::from_str(raw).map_err(|e| CartError::corrupt(e.to_string()))?;

    let mut items = Vec::with_capacity(lines.len());
    for (idx, line) in lines.into_iter().enumerate() {
        let item = LineItem::new(line.id, line.name, line.price, line.quantity)
            .map_err(|e| CartError::corrupt(format!("line {idx}: {e}")))?;
        items.push(item);
    }

    Cart::from_items(items).map_err(|id| CartError::corrupt(format!("duplicate product id '{id}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1").unwrap(), "Widget", 9.99, 2).unwrap();
        cart.add(ProductId::new("p2").unwrap(), "Gadget", 4.5, 1).unwrap();
        cart
    }

    #[test]
    fn encodes_the_documented_shape() {
        assert_eq!(
            encode(&sample_cart()).unwrap(),
            r#"[{"id":"p1","name":"Widget","price":9.99,"quantity":2},{"id":"p2","name":"Gadget","price":4.5,"quantity":1}]"#
        );
        assert_eq!(encode(&Cart::new()).unwrap(), "[]");
    }

    #[test]
    fn stored_text_round_trips_exactly() {
        let raw = r#"[{"id":"p2","name":"Gadget","price":4.5,"quantity":3},{"id":"p1","name":"Widget","price":9.99,"quantity":1}]"#;
        assert_eq!(encode(&decode(raw).unwrap()).unwrap(), raw);
    }

    #[test]
    fn rejects_malformed_documents() {
        let cases = [
            ("not json", "syntax"),
            (r#"{"id":"p1"}"#, "not an array"),
            (r#"[{"id":"p1","name":"W","price":1.0}]"#, "missing quantity"),
            (r#"[{"id":"","name":"W","price":1.0,"quantity":1}]"#, "empty id"),
            (r#"[{"id":"p1","name":"W","price":-1.0,"quantity":1}]"#, "negative price"),
            (r#"[{"id":"p1","name":"W","price":1.0,"quantity":0}]"#, "zero quantity"),
            (r#"[{"id":"p1","name":"W","price":1.0,"quantity":-2}]"#, "negative quantity"),
            (r#"[{"id":"p1","name":"W","price":1.0,"quantity":1.5}]"#, "fractional quantity"),
            (r#"[{"id":"p1","name":"W","price":"1.0","quantity":1}]"#, "string price"),
            (
                r#"[{"id":"p1","name":"W","price":1.0,"quantity":1},{"id":"p1","name":"W","price":1.0,"quantity":1}]"#,
                "duplicate id",
            ),
        ];

        for (raw, why) in cases {
            match decode(raw) {
                Err(CartError::PersistenceCorrupt(_)) => {}
                other => panic!("expected corrupt error for {why}, got {other:?}"),
            }
        }
    }
}
