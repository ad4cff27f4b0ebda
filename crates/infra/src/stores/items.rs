use storefront_catalog::{Item, ItemPatch, ItemQuery};
use storefront_core::{DomainError, DomainResult, ItemId};

use crate::read_model::{InMemoryTable, RecordTable};

/// Catalog storage: id allocation, full/partial updates, soft delete, listing.
///
/// Prices are not validated here; callers enforce the price rule first.
#[derive(Debug, Default)]
pub struct ItemStore<S = InMemoryTable<ItemId, Item>>
where
    S: RecordTable<ItemId, Item>,
{
    table: S,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::with_table(InMemoryTable::new())
    }
}

impl<S> ItemStore<S>
where
    S: RecordTable<ItemId, Item>,
{
    pub fn with_table(table: S) -> Self {
        Self { table }
    }

    pub fn add(&self, name: impl Into<String>, price: f64) -> Item {
        let name = name.into();
        let item = self.table.insert_with(|id| Item::new(id, name, price));
        tracing::info!(item_id = %item.id_typed(), price, "item created");
        item
    }

    /// Fetch by id, deleted or not.
    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.table
            .get(&id)
            .ok_or_else(|| DomainError::not_found("item", id))
    }

    /// Overwrite name and price; the record comes back un-deleted.
    pub fn replace(&self, id: ItemId, name: impl Into<String>, price: f64) -> DomainResult<Item> {
        let name = name.into();
        let item = self
            .table
            .update(&id, |item| {
                *item = item.replaced(name, price);
                item.clone()
            })
            .ok_or_else(|| DomainError::not_found("item", id))?;
        tracing::info!(item_id = %id, "item replaced");
        Ok(item)
    }

    /// Merge the fields present in `patch`; the deleted flag is left alone.
    pub fn update(&self, id: ItemId, patch: &ItemPatch) -> DomainResult<Item> {
        let item = self
            .table
            .update(&id, |item| {
                *item = patch.apply(item);
                item.clone()
            })
            .ok_or_else(|| DomainError::not_found("item", id))?;
        tracing::debug!(item_id = %id, empty_patch = patch.is_empty(), "item updated");
        Ok(item)
    }

    /// Idempotent: deleting a deleted item succeeds without change.
    pub fn soft_delete(&self, id: ItemId) -> DomainResult<()> {
        let changed = self
            .table
            .update(&id, Item::mark_deleted)
            .ok_or_else(|| DomainError::not_found("item", id))?;
        if changed {
            tracing::info!(item_id = %id, "item soft-deleted");
        }
        Ok(())
    }

    pub fn list(&self, query: &ItemQuery) -> Vec<Item> {
        self.table.select(|item| query.matches(item), query.page)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
