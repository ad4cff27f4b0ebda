//! Item and cart stores.
//!
//! Each store owns one table behind one lock; every operation is a single
//! critical section, so id allocation and mutations never interleave.

pub mod carts;
pub mod items;

pub use carts::CartStore;
pub use items::ItemStore;
