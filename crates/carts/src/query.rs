use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Page, ValueObject};

use crate::cart::Cart;

/// Filter + paging window for cart listings.
///
/// Price bounds apply to the cart's cached `price`; quantity bounds apply to
/// the total quantity across all lines. All bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartQuery {
    pub page: Page,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

impl CartQuery {
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

    pub fn with_quantity_range(mut self, min_quantity: Option<i64>, max_quantity: Option<i64>) -> Self {
        self.min_quantity = min_quantity;
        self.max_quantity = max_quantity;
        self
    }

    pub fn matches(&self, cart: &Cart) -> bool {
        let price = cart.price();
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }

        // i128 keeps the comparison exact for any u64 total and any i64 bound.
        let quantity = i128::from(cart.total_quantity());
        if self.min_quantity.is_some_and(|min| quantity < i128::from(min)) {
            return false;
        }
        if self.max_quantity.is_some_and(|max| quantity > i128::from(max)) {
            return false;
        }
        true
    }

    /// Reject negative bounds.
    pub fn validate(&self) -> DomainResult<()> {
        let checks = [
            ("min_price", self.min_price.is_some_and(|v| v < 0.0)),
            ("max_price", self.max_price.is_some_and(|v| v < 0.0)),
            ("min_quantity", self.min_quantity.is_some_and(|v| v < 0)),
            ("max_quantity", self.max_quantity.is_some_and(|v| v < 0)),
        ];
        match checks.iter().find(|(_, negative)| *negative) {
            Some((name, _)) => Err(DomainError::invalid_argument(format!(
                "{name} must be non-negative"
            ))),
            None => Ok(()),
        }
    }
}

impl ValueObject for CartQuery {}
