//! Cart widget: badge, modal view and checkout messages.

use core::fmt;

use sdmart_cart::{CartError, CartResult, CartSnapshot, CartStore};
use sdmart_core::money::{format_amount, format_price};
use sdmart_storage::KeyValueStore;

use crate::catalog::ProductListing;

pub const EMPTY_CART_PLACEHOLDER: &str = "Your cart is empty.";
pub const EMPTY_CART_CHECKOUT: &str = "Your cart is empty. Add some products before checking out!";

/// Rendered content of the cart modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One row per line, or the single empty-cart placeholder.
    pub rows: Vec<String>,
    /// Grand total with two decimals, without currency sign.
    pub total: String,
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        let rows = match snapshot {
            CartSnapshot::Empty => vec![EMPTY_CART_PLACEHOLDER.to_string()],
            CartSnapshot::Items { lines, .. } => lines
                .iter()
                .map(|line| {
                    format!(
                        "{} (x{})  {}",
                        line.name,
                        line.quantity,
                        format_price(line.line_total)
                    )
                })
                .collect(),
        };

        Self {
            rows,
            total: format_amount(snapshot.total()),
        }
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        write!(f, "Total: ${}", self.total)
    }
}

/// What the shopper is told after pressing "Checkout".
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Confirmed { total: f64, message: String },
    Rejected { message: String },
}

impl CheckoutOutcome {
    pub fn message(&self) -> &str {
        match self {
            CheckoutOutcome::Confirmed { message, .. } | CheckoutOutcome::Rejected { message } => message,
        }
    }
}

/// The cart widget: an injected `CartStore` plus the modal's open state.
#[derive(Debug)]
pub struct CartWidget<S> {
    cart: CartStore<S>,
    modal_open: bool,
}

impl<S> CartWidget<S>
where
    S: KeyValueStore,
{
    pub fn new(cart: CartStore<S>) -> Self {
        Self {
            cart,
            modal_open: false,
        }
    }

    /// "Add to Cart" click: one unit of the listing. Returns the new badge text.
    pub fn click_add(&mut self, listing: &ProductListing) -> CartResult<String> {
        self.cart
            .add_one(listing.id.as_str(), &listing.name, listing.price)?;
        Ok(self.badge())
    }

    /// Open the modal with freshly rendered content.
    pub fn open_cart(&mut self) -> CartView {
        self.modal_open = true;
        self.render()
    }

    /// Finish the order.
    ///
    /// An empty cart is reported to the shopper, not treated as a failure.
    /// Storage failures are returned as errors.
    pub fn checkout(&mut self) -> CartResult<CheckoutOutcome> {
        match self.cart.checkout() {
            Ok(total) => {
                self.modal_open = false;
                Ok(CheckoutOutcome::Confirmed {
                    total,
                    message: format!(
                        "Thank you for your order! Your total is {}. We'll contact you soon.",
                        format_price(total)
                    ),
                })
            }
            Err(CartError::EmptyCart) => Ok(CheckoutOutcome::Rejected {
                message: EMPTY_CART_CHECKOUT.to_string(),
            }),
            Err(err) => Err(err),
        }
    }

    /// Administrative reset of the cart.
    pub fn clear(&mut self) -> CartResult<()> {
        self.cart.clear()
    }
}

impl<S> CartWidget<S> {
    /// Header badge: total number of units in the cart.
    pub fn badge(&self) -> String {
        self.cart.item_count().to_string()
    }

    pub fn render(&self) -> CartView {
        CartView::from(&self.cart.snapshot())
    }

    pub fn close_cart(&mut self) {
        self.modal_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }
}
