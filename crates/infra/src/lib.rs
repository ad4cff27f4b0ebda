//! Infrastructure layer: in-memory storage for items and carts.

pub mod read_model;
pub mod stores;


pub use read_model::{InMemoryTable, RecordTable};
pub use stores::{CartStore, ItemStore};
