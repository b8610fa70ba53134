//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalogue records implement this so listings can key rendered items by
/// identity instead of by position.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
