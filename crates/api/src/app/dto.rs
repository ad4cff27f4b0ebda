use serde::Deserialize;

use storefront_carts::{Cart, CartItem, CartQuery};
use storefront_catalog::{Item, ItemPatch, ItemQuery};
use storefront_core::{DomainError, Page};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /item` and `PUT /item/:id`.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub price: f64,
}

/// Body of `PATCH /item/:id`. Unknown fields (including `deleted`) are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl From<PatchItemRequest> for ItemPatch {
    fn from(body: PatchItemRequest) -> Self {
        ItemPatch {
            name: body.name,
            price: body.price,
        }
    }
}

/// Query string of `GET /item`.
///
/// Numbers stay signed here so negative values reach validation and get a
/// 422 instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub show_deleted: Option<bool>,
}

impl TryFrom<ListItemsParams> for ItemQuery {
    type Error = DomainError;

    fn try_from(params: ListItemsParams) -> Result<Self, Self::Error> {
        let query = ItemQuery::new(Page::from_signed(params.offset, params.limit)?)
            .with_price_range(params.min_price, params.max_price)
            .with_deleted(params.show_deleted.unwrap_or(false));
        query.validate()?;
        Ok(query)
    }
}

/// Query string of `GET /cart`.
#[derive(Debug, Default, Deserialize)]
pub struct ListCartsParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

impl TryFrom<ListCartsParams> for CartQuery {
    type Error = DomainError;

    fn try_from(params: ListCartsParams) -> Result<Self, Self::Error> {
        let query = CartQuery::new(Page::from_signed(params.offset, params.limit)?)
            .with_price_range(params.min_price, params.max_price)
            .with_quantity_range(params.min_quantity, params.max_quantity);
        query.validate()?;
        Ok(query)
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id_typed().get(),
        "name": item.name(),
        "price": item.price(),
        "deleted": item.is_deleted(),
    })
}

pub fn cart_item_to_json(line: &CartItem) -> serde_json::Value {
    serde_json::json!({
        "id": line.id.get(),
        "name": line.name,
        "quantity": line.quantity,
        "is_in_stock": line.is_in_stock,
        "price": line.price,
    })
}

/// `total_cost` is derived from the lines; `price` is the cached running total.
pub fn cart_to_json(cart: &Cart) -> serde_json::Value {
    serde_json::json!({
        "id": cart.id_typed().get(),
        "items": cart.items().iter().map(cart_item_to_json).collect::<Vec<_>>(),
        "total_cost": cart.total_cost(),
        "price": cart.price(),
    })
}
