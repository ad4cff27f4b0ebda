use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ItemId, ValueObject};

/// Catalog item.
///
/// `deleted` is a soft-delete flag: the record stays fetchable by id but is
/// hidden from default listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: f64,
    deleted: bool,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            deleted: false,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Full overwrite of the mutable fields. Always clears `deleted`.
    pub fn replaced(&self, name: impl Into<String>, price: f64) -> Self {
        Self::new(self.id, name, price)
    }

    /// Set the soft-delete flag. Returns `false` if it was already set.
    pub fn mark_deleted(&mut self) -> bool {
        !core::mem::replace(&mut self.deleted, true)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial update of an item: every present field overwrites, absent ones stay.
///
/// The soft-delete flag is never touched by a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Merge this patch over `item`, returning the new record.
    pub fn apply(&self, item: &Item) -> Item {
        Item {
            id: item.id,
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            price: self.price.unwrap_or(item.price),
            deleted: item.deleted,
        }
    }

    /// Price rule for patches: if a price is given it must be positive.
    pub fn validate(&self) -> DomainResult<()> {
        match self.price {
            Some(price) => ensure_positive_price(price),
            None => Ok(()),
        }
    }
}

impl ValueObject for ItemPatch {}

/// Prices must be finite and strictly greater than zero.
pub fn ensure_positive_price(price: f64) -> DomainResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(DomainError::validation("price must be greater than zero"))
    }
}
