use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_carts::CartQuery;
use storefront_core::{CartId, ItemId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/cart", post(create_cart).get(list_carts))
        .route("/cart/:id", get(get_cart))
        .route("/cart/:cart_id/add/:item_id", post(add_item_to_cart))
}

pub async fn create_cart(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let id = services.carts().create();
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/cart/{id}"))],
        Json(serde_json::json!({ "id": id.get() })),
    )
        .into_response()
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CartId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.carts().get(id) {
        Ok(cart) => (StatusCode::OK, Json(dto::cart_to_json(&cart))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_carts(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::ListCartsParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => return errors::rejection_to_response(e),
    };
    let query = match CartQuery::try_from(params) {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let carts = services
        .carts()
        .list(&query)
        .iter()
        .map(dto::cart_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(carts)).into_response()
}

pub async fn add_item_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path((cart_id, item_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (cart_id, item_id): (CartId, ItemId) = match (cart_id.parse(), item_id.parse()) {
        (Ok(c), Ok(i)) => (c, i),
        (Err(e), _) | (_, Err(e)) => return errors::domain_error_to_response(e),
    };

    match services.add_to_cart(cart_id, item_id) {
        Ok(line) => (StatusCode::OK, Json(dto::cart_item_to_json(&line))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
