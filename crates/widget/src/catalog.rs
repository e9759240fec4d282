//! Product listings as they appear on the storefront page.

use sdmart_core::{DomainError, DomainResult, ProductId};

/// Raw attributes of a product card, as scraped from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCard<'a> {
    /// `data-product-id`
    pub product_id: &'a str,
    /// `data-price`
    pub price_attr: &'a str,
    /// Heading text, possibly decorated (e.g. `"Widget 🛒"`).
    pub title: &'a str,
}

/// A product the shopper can add to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl ProductListing {
    pub fn from_card(card: &ProductCard<'_>) -> DomainResult<Self> {
        let id = ProductId::new(card.product_id)?;

        let price: f64 = card
            .price_attr
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("unparsable price '{}'", card.price_attr)))?;
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!("invalid price '{}'", card.price_attr)));
        }

        Ok(Self {
            id,
            name: clean_title(card.title),
            price,
        })
    }
}

/// Strip decoration from a card heading.
///
/// Trims the text, then drops every space that is directly followed by a
/// non-word character, together with that character: `"Widget 🛒"` becomes
/// `"Widget"`, `"Kit - Blue"` becomes `"Kit Blue"`.
pub fn clean_title(title: &str) -> String {
    let trimmed = title.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ' ' {
            if let Some(&next) = chars.peek() {
                if !is_word_char(next) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_decorated_titles() {
        assert_eq!(clean_title("  Widget 🛒 "), "Widget");
        assert_eq!(clean_title("Deluxe Kit - Blue"), "Deluxe Kit Blue");
        assert_eq!(clean_title("Gadget"), "Gadget");
        assert_eq!(clean_title("Solar Lamp"), "Solar Lamp");
    }

    #[test]
    fn parses_card_attributes() {
        let card = ProductCard {
            product_id: "p1",
            price_attr: " 9.99 ",
            title: "Widget ⭐",
        };

        let listing = ProductListing::from_card(&card).unwrap();
        assert_eq!(listing.id.as_str(), "p1");
        assert_eq!(listing.name, "Widget");
        assert_eq!(listing.price, 9.99);
    }

    #[test]
    fn rejects_bad_cards() {
        let bad = [
            ProductCard { product_id: "", price_attr: "1", title: "A" },
            ProductCard { product_id: "p1", price_attr: "abc", title: "A" },
            ProductCard { product_id: "p1", price_attr: "-3", title: "A" },
            ProductCard { product_id: "p1", price_attr: "inf", title: "A" },
        ];

        for card in bad {
            assert!(ProductListing::from_card(&card).is_err(), "{card:?}");
        }
    }
}
