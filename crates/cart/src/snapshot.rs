use sdmart_core::ValueObject;

/// One rendered row of the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotLine {
    pub name: String,
    pub quantity: u32,
    /// `unit_price * quantity`, unrounded.
    pub line_total: f64,
}

impl ValueObject for SnapshotLine {}

/// Immutable, render-ready view of the cart.
///
/// An empty cart is its own variant so a renderer cannot silently show an
/// empty list where a placeholder belongs.
#[derive(Debug, Clone, PartialEq)]
pub enum CartSnapshot {
    Empty,
    Items {
        lines: Vec<SnapshotLine>,
        /// Grand total, unrounded.
        total: f64,
    },
}

impl ValueObject for CartSnapshot {}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        matches!(self, CartSnapshot::Empty)
    }

    pub fn lines(&self) -> &[SnapshotLine] {
        match self {
            CartSnapshot::Empty => &[],
            CartSnapshot::Items { lines, .. } => lines,
        }
    }

    pub fn total(&self) -> f64 {
        match self {
            CartSnapshot::Empty => 0.0,
            CartSnapshot::Items { total, .. } => *total,
        }
    }
}
