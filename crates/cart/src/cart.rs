use sdmart_core::{DomainResult, Entity, ProductId};

use crate::line_item::{LineItem, validate_price, validate_quantity};
use crate::snapshot::{CartSnapshot, SnapshotLine};

/// Ordered collection of line items, at most one per product.
///
/// Order is the order in which products were first added. `Cart` does no IO;
/// `CartStore` decides when a changed cart becomes the current one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from already-validated items.
    ///
    /// Fails if two items share a product id.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, ProductId> {
        let mut cart = Self::new();
        for item in items {
            if cart.find(item.id()).is_some() {
                return Err(item.id().clone());
            }
            cart.items.push(item);
        }
        Ok(cart)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Merge `quantity` units of a product into the cart.
    ///
    /// An existing line keeps its name and price and only grows in quantity;
    /// otherwise a new line is appended. Returns the line's new quantity.
    /// On error the cart is unchanged.
    pub fn add(
        &mut self,
        id: ProductId,
        name: &str,
        unit_price: f64,
        quantity: u32,
    ) -> DomainResult<u32> {
        validate_price(unit_price)?;
        validate_quantity(quantity)?;

        if let Some(existing) = self.items.iter_mut().find(|item| item.id() == &id) {
            existing.increase(quantity)?;
            return Ok(existing.quantity());
        }

        let item = LineItem::new(id, name, unit_price, quantity)?;
        self.items.push(item);
        Ok(quantity)
    }

    /// Sum of `unit_price * quantity` over all lines, unrounded.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        if self.items.is_empty() {
            return CartSnapshot::Empty;
        }

        let lines = self
            .items
            .iter()
            .map(|item| SnapshotLine {
                name: item.name().to_string(),
                quantity: item.quantity(),
                line_total: item.line_total(),
            })
            .collect();

        CartSnapshot::Items {
            lines,
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn same_product_merges_first_write_wins() {
        let mut cart = Cart::new();
        cart.add(pid("p1"), "Widget", 9.99, 1).unwrap();
        let qty = cart.add(pid("p1"), "Renamed", 1.00, 2).unwrap();

        assert_eq!(qty, 3);
        assert_eq!(cart.len(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.name(), "Widget");
        assert_eq!(line.unit_price(), 9.99);
    }

    #[test]
    fn new_products_append_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add(pid("b"), "B", 1.0, 1).unwrap();
        cart.add(pid("a"), "A", 1.0, 1).unwrap();
        cart.add(pid("b"), "B", 1.0, 1).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn failed_add_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add(pid("p1"), "Widget", 1.0, u32::MAX).unwrap();
        let before = cart.clone();

        assert!(cart.add(pid("p1"), "Widget", 1.0, 1).is_err());
        assert!(cart.add(pid("p2"), "Gadget", -1.0, 1).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn from_items_rejects_duplicates() {
        let a = LineItem::new(pid("p1"), "A", 1.0, 1).unwrap();
        let b = LineItem::new(pid("p1"), "B", 2.0, 1).unwrap();
        assert_eq!(Cart::from_items(vec![a, b]).unwrap_err(), pid("p1"));
    }

    #[test]
    fn empty_cart_snapshot_is_explicit() {
        assert_eq!(Cart::new().snapshot(), CartSnapshot::Empty);
        assert_eq!(Cart::new().item_count(), 0);
        assert_eq!(Cart::new().total(), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: distinct ids give one line each and the count is the
        /// sum of the quantities added.
        #[test]
        fn distinct_ids_count_and_lines(
            adds in prop::collection::vec((0u32..10_000, 1u32..50), 0..20)
        ) {
            let mut cart = Cart::new();
            for (idx, (cents, qty)) in adds.iter().enumerate() {
                let id = pid(&format!("p{idx}"));
                cart.add(id, "item", f64::from(*cents) / 100.0, *qty).unwrap();
            }

            let expected: u64 = adds.iter().map(|(_, q)| u64::from(*q)).sum();
            prop_assert_eq!(cart.item_count(), expected);
            prop_assert_eq!(cart.snapshot().lines().len(), adds.len());
        }

        /// Property: total is exactly the sum of unit_price * quantity.
        #[test]
        fn total_is_sum_of_line_totals(
            adds in prop::collection::vec((0usize..5, 0u32..10_000, 1u32..20), 1..30)
        ) {
            let mut cart = Cart::new();
            for (slot, cents, qty) in &adds {
                cart.add(pid(&format!("p{slot}")), "item", f64::from(*cents) / 100.0, *qty).unwrap();
            }

            let expected: f64 = cart
                .items()
                .iter()
                .map(|i| i.unit_price() * f64::from(i.quantity()))
                .sum();
            prop_assert_eq!(cart.total(), expected);

            let per_slot: u64 = adds.iter().map(|(_, _, q)| u64::from(*q)).sum();
            prop_assert_eq!(cart.item_count(), per_slot);
        }
    }
}
