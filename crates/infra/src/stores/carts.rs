use storefront_carts::{Cart, CartItem, CartQuery};
use storefront_catalog::Item;
use storefront_core::{CartId, DomainError, DomainResult};

use crate::read_model::{InMemoryTable, RecordTable};

/// Cart storage.
///
/// Items arrive by value from the caller; this store never reads the catalog.
/// Callers are expected to reject deleted items before `add_item`.
#[derive(Debug, Default)]
pub struct CartStore<S = InMemoryTable<CartId, Cart>>
where
    S: RecordTable<CartId, Cart>,
{
    table: S,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_table(InMemoryTable::new())
    }
}

impl<S> CartStore<S>
where
    S: RecordTable<CartId, Cart>,
{
    pub fn with_table(table: S) -> Self {
        Self { table }
    }

    pub fn create(&self) -> CartId {
        let cart = self.table.insert_with(Cart::new);
        let id = cart.id_typed();
        tracing::info!(cart_id = %id, "cart created");
        id
    }

    pub fn get(&self, id: CartId) -> DomainResult<Cart> {
        self.table
            .get(&id)
            .ok_or_else(|| DomainError::not_found("cart", id))
    }

    /// Add one unit of `item` to the cart, snapshotting it on first add.
    pub fn add_item(&self, cart_id: CartId, item: &Item) -> DomainResult<CartItem> {
        let line = self
            .table
            .update(&cart_id, |cart| cart.add(item))
            .ok_or_else(|| DomainError::not_found("cart", cart_id))?;
        tracing::info!(
            cart_id = %cart_id,
            item_id = %line.id,
            quantity = line.quantity,
            "item added to cart"
        );
        Ok(line)
    }

    pub fn list(&self, query: &CartQuery) -> Vec<Cart> {
        self.table.select(|cart| query.matches(cart), query.page)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Entity, ItemId, Page};

    fn item(id: u64, name: &str, price: f64) -> Item {
        Item::new(ItemId::new(id), name, price)
    }

    #[test]
    fn create_assigns_sequential_ids_and_empty_carts() {
        let store = CartStore::new();
        assert_eq!(store.create(), CartId::new(1));
        assert_eq!(store.create(), CartId::new(2));

        let cart = store.get(CartId::new(2)).unwrap();
        assert!(cart.items().is_empty());
        assert_eq!(cart.price(), 0.0);
    }

    #[test]
    fn get_unknown_cart_is_not_found() {
        let store = CartStore::new();
        match store.get(CartId::new(5)) {
            Err(DomainError::NotFound { entity, id }) => {
                assert_eq!(entity, "cart");
                assert_eq!(id, 5);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn add_item_to_unknown_cart_is_not_found() {
        let store = CartStore::new();
        let err = store.add_item(CartId::new(1), &item(1, "pen", 2.5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn adding_same_item_twice_yields_one_line() {
        let store = CartStore::new();
        let cart_id = store.create();
        let a = item(1, "a", 3.0);
        store.add_item(cart_id, &a).unwrap();
        let line = store.add_item(cart_id, &a).unwrap();
        assert_eq!(line.quantity, 2);

        let cart = store.get(cart_id).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_cost(), 2.0 * a.price());
    }

    #[test]
    fn two_items_total_fifteen() {
        let store = CartStore::new();
        let cart_id = store.create();
        store.add_item(cart_id, &item(1, "a", 10.0)).unwrap();
        store.add_item(cart_id, &item(2, "b", 5.0)).unwrap();

        let cart = store.get(cart_id).unwrap();
        assert_eq!(cart.total_cost(), 15.0);
        assert_eq!(cart.price(), 15.0);
    }

    #[test]
    fn list_filters_on_total_quantity() {
        let store = CartStore::new();
        let widget = item(1, "widget", 1.0);
        let two = store.create();
        let three = store.create();
        for _ in 0..2 {
            store.add_item(two, &widget).unwrap();
        }
        for _ in 0..3 {
            store.add_item(three, &widget).unwrap();
        }

        let got = store.list(&CartQuery::default().with_quantity_range(Some(3), None));
        let ids: Vec<CartId> = got.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![three]);
    }

    #[test]
    fn list_filters_on_cached_price_and_pages() {
        let store = CartStore::new();
        let cheap = item(1, "cheap", 1.0);
        let pricey = item(2, "pricey", 50.0);
        for n in 0..5 {
            let id = store.create();
            store
                .add_item(id, if n % 2 == 0 { &pricey } else { &cheap })
                .unwrap();
        }

        let q = CartQuery::new(Page::new(1, 10)).with_price_range(Some(10.0), None);
        let ids: Vec<u64> = store.list(&q).iter().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![3, 5]);

        let inverted = CartQuery::default().with_price_range(Some(60.0), Some(10.0));
        assert!(store.list(&inverted).is_empty());
    }

    #[test]
    fn list_offset_past_end_is_empty() {
        let store = CartStore::new();
        store.create();
        assert!(store.list(&CartQuery::new(Page::new(1, 10))).is_empty());
    }

    #[test]
    fn pen_and_mug_scenario() {
        let store = CartStore::new();
        let pen = item(1, "pen", 2.5);
        let mug = item(2, "mug", 8.0);
        let cart_id = store.create();
        assert_eq!(cart_id, CartId::new(1));

        let line = store.add_item(cart_id, &pen).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(store.get(cart_id).unwrap().total_cost(), 2.5);

        let line = store.add_item(cart_id, &pen).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(store.get(cart_id).unwrap().total_cost(), 5.0);

        store.add_item(cart_id, &mug).unwrap();
        let cart = store.get(cart_id).unwrap();
        assert_eq!(cart.total_cost(), 13.0);

        let lines: Vec<(u64, u64, f64)> = cart
            .items()
            .iter()
            .map(|l| (l.id.get(), l.quantity, l.price))
            .collect();
        assert_eq!(lines, vec![(1, 2, 2.5), (2, 1, 8.0)]);
    }
}
