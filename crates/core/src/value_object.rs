//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. In the cart, rendered snapshot lines are value objects,
//! while line items are entities keyed by product id.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct SnapshotLine {
///     name: String,
///     quantity: u32,
///     line_total: f64,
/// }
///
/// impl ValueObject for SnapshotLine {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
