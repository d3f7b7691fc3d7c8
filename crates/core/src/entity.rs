//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their ids match, regardless of the
/// rest of their attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns true when `other` carries the same identity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
