//! Carts domain module.
//!
//! Carts hold *snapshots* of catalog items: name, price and availability are
//! copied when an item is first added and never refreshed afterwards.

pub mod cart;
pub mod query;

pub use cart::{Cart, CartItem};
pub use query::CartQuery;
