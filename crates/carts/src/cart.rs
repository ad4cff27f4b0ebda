use serde::{Deserialize, Serialize};

use storefront_catalog::Item;
use storefront_core::{CartId, Entity, ItemId};

/// Snapshot of a catalog item inside a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u64,
    pub available: bool,
    pub is_in_stock: bool,
}

impl CartItem {
    /// Copy the fields of `item` as they are right now, with quantity 1.
    pub fn snapshot(item: &Item) -> Self {
        let in_stock = !item.is_deleted();
        Self {
            id: item.id(),
            name: item.name().to_string(),
            price: item.price(),
            quantity: 1,
            available: in_stock,
            is_in_stock: in_stock,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Cart: line items keyed by item id, in first-insertion order.
///
/// `price` is a running total bumped on every add; `total_cost()` is always
/// recomputed from the lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    items: Vec<CartItem>,
    price: f64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            price: 0.0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, item_id: ItemId) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == item_id)
    }

    /// Cached running total.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Derived total: sum of `quantity * price` over all lines.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Add one unit of `item`.
    ///
    /// A line already present only gets its quantity bumped; its snapshot
    /// fields stay as first copied. The cached price grows by `item.price()`
    /// either way. Returns the resulting line.
    pub fn add(&mut self, item: &Item) -> CartItem {
        let line = match self.items.iter().position(|line| line.id == item.id()) {
            Some(idx) => {
                let line = &mut self.items[idx];
                line.quantity += 1;
                line.clone()
            }
            None => {
                let line = CartItem::snapshot(item);
                self.items.push(line.clone());
                line
            }
        };
        self.price += item.price();
        line
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::ItemPatch;

    fn item(id: u64, name: &str, price: f64) -> Item {
        Item::new(ItemId::new(id), name, price)
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(CartId::new(1));
        assert!(cart.items().is_empty());
        assert_eq!(cart.price(), 0.0);
        assert_eq!(cart.total_cost(), 0.0);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn adding_same_item_twice_bumps_quantity() {
        let a = item(1, "a", 4.0);
        let mut cart = Cart::new(CartId::new(1));

        let first = cart.add(&a);
        assert_eq!(first.quantity, 1);
        let second = cart.add(&a);
        assert_eq!(second.quantity, 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_cost(), 2.0 * a.price());
        assert_eq!(cart.price(), 8.0);
    }

    #[test]
    fn two_items_sum_into_total_and_cached_price() {
        let mut cart = Cart::new(CartId::new(1));
        cart.add(&item(1, "a", 10.0));
        cart.add(&item(2, "b", 5.0));

        assert_eq!(cart.total_cost(), 15.0);
        assert_eq!(cart.price(), 15.0);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn snapshot_is_not_refreshed_on_repeat_add() {
        let original = item(1, "pen", 2.5);
        let mut cart = Cart::new(CartId::new(1));
        cart.add(&original);

        let edited = ItemPatch {
            name: Some("fancy pen".to_string()),
            price: Some(3.0),
        }
        .apply(&original);
        let line = cart.add(&edited);

        assert_eq!(line.name, "pen");
        assert_eq!(line.price, 2.5);
        assert_eq!(line.quantity, 2);
        // The cached price follows the argument; the derived total follows the snapshot.
        assert_eq!(cart.price(), 5.5);
        assert_eq!(cart.total_cost(), 5.0);
    }

    #[test]
    fn snapshot_records_availability() {
        let mut gone = item(3, "mug", 8.0);
        gone.mark_deleted();
        let mut cart = Cart::new(CartId::new(1));
        let line = cart.add(&gone);
        assert!(!line.is_in_stock);
        assert!(!line.available);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new(CartId::new(1));
        cart.add(&item(5, "e", 1.0));
        cart.add(&item(2, "b", 1.0));
        cart.add(&item(5, "e", 1.0));
        let ids: Vec<u64> = cart.items().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: with unchanged items, the cached price equals the derived total
            /// and the total quantity equals the number of adds.
            #[test]
            fn cached_price_tracks_total_cost(
                adds in proptest::collection::vec(0usize..4, 0..40)
            ) {
                let catalog = [
                    item(1, "a", 1.25),
                    item(2, "b", 2.5),
                    item(3, "c", 10.0),
                    item(4, "d", 0.5),
                ];
                let mut cart = Cart::new(CartId::new(1));
                for idx in &adds {
                    cart.add(&catalog[*idx]);
                }

                prop_assert!((cart.price() - cart.total_cost()).abs() < 1e-9);
                prop_assert_eq!(cart.total_quantity(), adds.len() as u64);
                prop_assert!(cart.items().iter().all(|l| l.quantity >= 1));
            }
        }
    }
}
