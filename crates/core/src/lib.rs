//! `storefront-core`: shared building blocks for the shop domain.
//!
//! This crate contains **pure domain** primitives (no storage, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod page;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CartId, ItemId, SequentialId};
pub use page::Page;
pub use value_object::ValueObject;
