//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Item names and quantities carry no identity of their own; two instances
/// holding the same value are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
