use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use storefront_core::{Page, SequentialId};

/// Keyed record table with sequential id allocation.
///
/// Records are never removed, so iteration order (ascending id) is insertion
/// order and ids are never reused.
pub trait RecordTable<K, V>: Send + Sync {
    /// Allocate the next id and store the record built from it, atomically.
    fn insert_with<F>(&self, build: F) -> V
    where
        F: FnOnce(K) -> V;

    fn get(&self, key: &K) -> Option<V>;

    /// Mutate a record in place under the write guard.
    ///
    /// Returns `None` if the key is absent.
    fn update<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R;

    /// Filter in id order, then apply the paging window.
    fn select<P>(&self, predicate: P, page: Page) -> Vec<V>
    where
        P: Fn(&V) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> RecordTable<K, V> for Arc<S>
where
    S: RecordTable<K, V>,
{
    fn insert_with<F>(&self, build: F) -> V
    where
        F: FnOnce(K) -> V,
    {
        (**self).insert_with(build)
    }

    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn update<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        (**self).update(key, f)
    }

    fn select<P>(&self, predicate: P, page: Page) -> Vec<V>
    where
        P: Fn(&V) -> bool,
    {
        (**self).select(predicate, page)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory table guarded by a single lock.
///
/// A poisoned lock is recovered: every mutation leaves the map consistent.
#[derive(Debug)]
pub struct InMemoryTable<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K, V> InMemoryTable<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecordTable<K, V> for InMemoryTable<K, V>
where
    K: SequentialId + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn insert_with<F>(&self, build: F) -> V
    where
        F: FnOnce(K) -> V,
    {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = map.keys().next_back().copied().unwrap_or(K::ZERO).next();
        let record = build(id);
        map.insert(id, record.clone());
        record
    }

    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn update<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.get_mut(key).map(f)
    }

    fn select<P>(&self, predicate: P, page: Page) -> Vec<V>
    where
        P: Fn(&V) -> bool,
    {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        page.slice(map.values().filter(|v| predicate(v)))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ItemId;

    #[test]
    fn ids_start_at_one_and_increase() {
        let table: InMemoryTable<ItemId, (ItemId, &str)> = InMemoryTable::new();
        let a = table.insert_with(|id| (id, "a"));
        let b = table.insert_with(|id| (id, "b"));
        assert_eq!(a.0, ItemId::new(1));
        assert_eq!(b.0, ItemId::new(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn update_of_missing_key_is_none() {
        let table: InMemoryTable<ItemId, u32> = InMemoryTable::new();
        assert!(table.update(&ItemId::new(1), |v| *v += 1).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn update_mutates_in_place() {
        let table: InMemoryTable<ItemId, u32> = InMemoryTable::new();
        table.insert_with(|_| 10);
        let seen = table.update(&ItemId::new(1), |v| {
            *v += 5;
            *v
        });
        assert_eq!(seen, Some(15));
        assert_eq!(table.get(&ItemId::new(1)), Some(15));
    }

    #[test]
    fn select_filters_before_paging() {
        let table: InMemoryTable<ItemId, u32> = InMemoryTable::new();
        for n in 1..=10 {
            table.insert_with(|_| n);
        }
        let evens = table.select(|v| v % 2 == 0, Page::new(1, 2));
        assert_eq!(evens, vec![4, 6]);
        assert!(table.select(|_| true, Page::new(10, 5)).is_empty());
    }

    #[test]
    fn shared_through_arc() {
        let table = Arc::new(InMemoryTable::<ItemId, u32>::new());
        let clone = Arc::clone(&table);
        clone.insert_with(|_| 1);
        assert_eq!(RecordTable::len(&table), 1);
    }
}
