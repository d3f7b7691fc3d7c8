//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// validated field (such as an amenity name) is a value object: once it has
/// been constructed, it is known to satisfy its invariants.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
