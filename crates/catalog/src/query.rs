use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Page, ValueObject};

use crate::item::Item;

/// Filter + paging window for item listings.
///
/// Price bounds are inclusive. Bounds are applied literally: `max < min`
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub page: Page,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub show_deleted: bool,
}

impl ItemQuery {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_deleted(mut self, show_deleted: bool) -> Self {
        self.show_deleted = show_deleted;
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        if !self.show_deleted && item.is_deleted() {
            return false;
        }
        if self.min_price.is_some_and(|min| item.price() < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price() > max) {
            return false;
        }
        true
    }

    /// Reject negative price bounds.
    pub fn validate(&self) -> DomainResult<()> {
        if self.min_price.is_some_and(|v| v < 0.0) {
            return Err(DomainError::invalid_argument("min_price must be non-negative"));
        }
        if self.max_price.is_some_and(|v| v < 0.0) {
            return Err(DomainError::invalid_argument("max_price must be non-negative"));
        }
        Ok(())
    }
}

impl ValueObject for ItemQuery {}
