//! `sdmart-widget`
//!
//! **Responsibility:** presentation adapter around the cart.
//!
//! This crate provides:
//! - Product card parsing (what an "Add to Cart" click carries)
//! - The header badge, cart modal view and checkout messages
//! - Environment configuration and a line-oriented command surface
//!
//! The widget is a **thin shell**: every rule about the cart lives in
//! `sdmart-cart`.

pub mod catalog;
pub mod command;
pub mod config;
pub mod presenter;

pub use catalog::{ProductCard, ProductListing};
pub use command::{ParseCommandError, WidgetCommand};
pub use config::{ConfigError, WidgetConfig};
pub use presenter::{CartView, CartWidget, CheckoutOutcome};
