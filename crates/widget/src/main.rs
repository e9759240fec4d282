//! Terminal front-end for the cart widget.
//!
//! Reads one command per line from stdin, e.g.:
//!
//! ```text
//! add p1 9.99 Widget 🛒
//! add p2 4.50 Gadget
//! view
//! checkout
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;

use sdmart_cart::CartStore;
use sdmart_storage::{FileKeyValueStore, KeyValueStore};
use sdmart_widget::command::USAGE;
use sdmart_widget::{CartWidget, ProductListing, WidgetCommand, WidgetConfig};

fn main() -> anyhow::Result<()> {
    let config = WidgetConfig::from_env().context("invalid widget configuration")?;
    sdmart_observability::init(config.log_format);

    tracing::info!(
        store = %config.store_path.display(),
        key = %config.cart_key,
        "starting cart widget"
    );

    let store = FileKeyValueStore::new(&config.store_path);
    let mut widget = CartWidget::new(CartStore::open_with_key(store, config.cart_key.clone()));

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    run(&mut widget, stdin.lock(), &mut out)
}

/// Drive the widget from line commands until `quit` or end of input.
///
/// Cart errors are reported on `out` and the loop keeps going; only I/O on
/// `input`/`out` ends it early.
fn run<S, R, W>(widget: &mut CartWidget<S>, input: R, out: &mut W) -> anyhow::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "cart: {}", widget.badge())?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<WidgetCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match &command {
            WidgetCommand::Add { .. } => {
                let Some(card) = command.as_card() else {
                    continue;
                };
                match ProductListing::from_card(&card) {
                    Ok(listing) => match widget.click_add(&listing) {
                        Ok(badge) => writeln!(out, "cart: {badge}")?,
                        Err(err) => writeln!(out, "could not add item: {err}")?,
                    },
                    Err(err) => writeln!(out, "invalid product: {err}")?,
                }
            }
            WidgetCommand::Badge => writeln!(out, "cart: {}", widget.badge())?,
            WidgetCommand::View => writeln!(out, "{}", widget.open_cart())?,
            WidgetCommand::Close => widget.close_cart(),
            WidgetCommand::Checkout => match widget.checkout() {
                Ok(outcome) => writeln!(out, "{}", outcome.message())?,
                Err(err) => writeln!(out, "checkout failed: {err}")?,
            },
            WidgetCommand::Clear => match widget.clear() {
                Ok(()) => writeln!(out, "cart: {}", widget.badge())?,
                Err(err) => writeln!(out, "could not clear cart: {err}")?,
            },
            WidgetCommand::Help => writeln!(out, "{USAGE}")?,
            WidgetCommand::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}
