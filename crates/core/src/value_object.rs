//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. In this workspace that covers patches, queries and
//! paging windows.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (two value objects with same values are equal)
/// - **Entity**: has identity (two entities with the same id are the same record)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceRange {
///     min: Option<f64>,
///     max: Option<f64>,
/// }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
