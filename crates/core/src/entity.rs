//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A cart line is an entity keyed by its product: adding the same product
/// again changes the line's quantity, it does not create a second line.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
