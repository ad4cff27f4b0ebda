//! Catalog domain module.
//!
//! This crate contains the item model and the pure logic around it (patch
//! merging, list filtering, price rules). Storage lives in `storefront-infra`.

pub mod item;
pub mod query;

pub use item::{ensure_positive_price, Item, ItemPatch};
pub use query::ItemQuery;
