//! Line-oriented commands accepted by the widget binary.

use core::str::FromStr;

use thiserror::Error;

use crate::catalog::ProductCard;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// `add <id> <price> <title...>`: click "Add to Cart" on a product card.
    Add {
        product_id: String,
        price: String,
        title: String,
    },
    /// `badge`: print the header item count.
    Badge,
    /// `view`: open the cart modal.
    View,
    /// `close`: close the cart modal.
    Close,
    /// `checkout`: press the checkout button.
    Checkout,
    /// `clear`: administrative reset.
    Clear,
    /// `help`: list commands.
    Help,
    /// `quit`
    Quit,
}

impl WidgetCommand {
    /// Borrow an `Add` command as the product card it describes.
    pub fn as_card(&self) -> Option<ProductCard<'_>> {
        match self {
            WidgetCommand::Add {
                product_id,
                price,
                title,
            } => Some(ProductCard {
                product_id,
                price_attr: price,
                title,
            }),
            _ => None,
        }
    }
}

pub const USAGE: &str = "commands: add <id> <price> <name...> | badge | view | close | checkout | clear | help | quit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("usage: add <id> <price> <name...>")]
    AddUsage,
}

impl FromStr for WidgetCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "add" => parse_add(rest),
            "badge" => Ok(WidgetCommand::Badge),
            "view" | "cart" => Ok(WidgetCommand::View),
            "close" => Ok(WidgetCommand::Close),
            "checkout" => Ok(WidgetCommand::Checkout),
            "clear" => Ok(WidgetCommand::Clear),
            "help" => Ok(WidgetCommand::Help),
            "quit" | "exit" => Ok(WidgetCommand::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_add(rest: &str) -> Result<WidgetCommand, ParseCommandError> {
    let mut parts = rest.splitn(3, char::is_whitespace);
    let product_id = parts.next().filter(|p| !p.is_empty());
    let price = parts.next().filter(|p| !p.is_empty());
    let title = parts.next().map(str::trim).filter(|t| !t.is_empty());

    match (product_id, price, title) {
        (Some(product_id), Some(price), Some(title)) => Ok(WidgetCommand::Add {
            product_id: product_id.to_string(),
            price: price.to_string(),
            title: title.to_string(),
        }),
        _ => Err(ParseCommandError::AddUsage),
    }
}
