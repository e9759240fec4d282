use sdmart_core::{DomainError, DomainResult, Entity, ProductId};

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    id: ProductId,
    name: String,
    /// Price of a single unit. Finite and non-negative.
    unit_price: f64,
    /// Always at least 1.
    quantity: u32,
}

impl LineItem {
    /// Build a validated line item.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> DomainResult<Self> {
        validate_price(unit_price)?;
        validate_quantity(quantity)?;

        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`, unrounded.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Increase the quantity. Name and price are left as first recorded.
    pub(crate) fn increase(&mut self, quantity: u32) -> DomainResult<()> {
        validate_quantity(quantity)?;
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("quantity overflow"))?;
        Ok(())
    }
}

impl Entity for LineItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

pub(crate) fn validate_price(unit_price: f64) -> DomainResult<()> {
    if !unit_price.is_finite() {
        return Err(DomainError::validation("unit_price must be a finite number"));
    }
    if unit_price < 0.0 {
        return Err(DomainError::validation("unit_price must not be negative"));
    }
    Ok(())
}

pub(crate) fn validate_quantity(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::validation("quantity must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = LineItem::new(pid("p1"), "Widget", 2.5, 4).unwrap();
        assert_eq!(item.line_total(), 10.0);
    }

    #[test]
    fn free_items_are_allowed() {
        let item = LineItem::new(pid("gift"), "Sticker", 0.0, 1).unwrap();
        assert_eq!(item.line_total(), 0.0);
    }

    #[test]
    fn rejects_negative_and_non_finite_prices() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let err = LineItem::new(pid("p1"), "Widget", price, 1).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{price}");
        }
    }

    #[test]
    fn rejects_zero_quantity() {
        let err = LineItem::new(pid("p1"), "Widget", 1.0, 0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
            _ => panic!("Expected validation error for zero quantity"),
        }
    }

    #[test]
    fn increase_detects_overflow_and_keeps_quantity() {
        let mut item = LineItem::new(pid("p1"), "Widget", 1.0, u32::MAX).unwrap();
        assert!(item.increase(1).is_err());
        assert_eq!(item.quantity(), u32::MAX);
    }
}
