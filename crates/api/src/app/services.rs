use storefront_carts::CartItem;
use storefront_catalog::Item;
use storefront_core::{CartId, DomainError, DomainResult, ItemId};
use storefront_infra::{CartStore, ItemStore};

/// Store instances shared by all handlers.
///
/// Built once in `main` (or per test server) and injected as an extension.
#[derive(Debug, Default)]
pub struct AppServices {
    items: ItemStore,
    carts: CartStore,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            items: ItemStore::new(),
            carts: CartStore::new(),
        }
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn carts(&self) -> &CartStore {
        &self.carts
    }

    /// Fetch an item that is visible to clients: soft-deleted counts as missing.
    pub fn active_item(&self, id: ItemId) -> DomainResult<Item> {
        let item = self.items.get(id)?;
        if item.is_deleted() {
            return Err(DomainError::not_found("item", id));
        }
        Ok(item)
    }

    /// Re-fetch the item and add its current state to the cart.
    pub fn add_to_cart(&self, cart_id: CartId, item_id: ItemId) -> DomainResult<CartItem> {
        self.carts.get(cart_id)?;
        let item = self.active_item(item_id)?;
        self.carts.add_item(cart_id, &item)
    }
}
