use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_catalog::{ensure_positive_price, ItemPatch, ItemQuery};
use storefront_core::ItemId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/item", post(create_item).get(list_items))
        .route(
            "/item/:id",
            get(get_item)
                .put(replace_item)
                .patch(update_item)
                .delete(delete_item),
        )
}

fn parse_id(id: &str) -> Result<ItemId, axum::response::Response> {
    id.parse().map_err(errors::domain_error_to_response)
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::rejection_to_response(e),
    };
    if let Err(e) = ensure_positive_price(body.price) {
        return errors::domain_error_to_response(e);
    }

    let item = services.items().add(body.name, body.price);
    (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.active_item(id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::ListItemsParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => return errors::rejection_to_response(e),
    };
    let query = match ItemQuery::try_from(params) {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let items = services
        .items()
        .list(&query)
        .iter()
        .map(dto::item_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn replace_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::rejection_to_response(e),
    };
    if let Err(e) = ensure_positive_price(body.price) {
        return errors::domain_error_to_response(e);
    }

    match services.items().replace(id, body.name, body.price) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::PatchItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let patch = match body {
        Ok(Json(b)) => ItemPatch::from(b),
        Err(e) => return errors::rejection_to_response(e),
    };

    // Deleted items are not patchable; only `PUT` brings them back.
    if let Err(e) = services.active_item(id) {
        return errors::domain_error_to_response(e);
    }
    if let Err(e) = patch.validate() {
        return errors::domain_error_to_response(e);
    }

    match services.items().update(id, &patch) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.items().soft_delete(id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
