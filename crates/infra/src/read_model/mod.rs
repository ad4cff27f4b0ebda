//! Record storage abstractions shared by the item and cart stores.

pub mod table;

pub use table::{InMemoryTable, RecordTable};
