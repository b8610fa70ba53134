use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use lustre_catalog::wishlist_page::WISHLIST_LOAD_ERROR;
use lustre_core::{ProductId, StoreError};

use crate::app::{
    dto::WishlistResponse,
    errors,
    extract::ApiPath,
    services::AppServices,
};

pub fn router() -> Router {
    Router::new()
        .route("/wishlist", get(list))
        .route("/wishlist/:id", delete(remove))
        .route("/wishlist/:id/toggle", post(toggle))
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>()
        .map_err(errors::store_error_to_response)
}

fn wishlist_error(err: StoreError) -> axum::response::Response {
    errors::store_error_with(err, WISHLIST_LOAD_ERROR)
}

pub async fn list(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.open_wishlist() {
        Ok(listing) => Json(WishlistResponse {
            count: services.wishlist_count(),
            listing,
        })
        .into_response(),
        Err(e) => wishlist_error(e),
    }
}

pub async fn toggle(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(id): ApiPath<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.toggle_wishlist(id) {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => errors::kv_error_to_response(e),
    }
}

pub async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(id): ApiPath<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.remove_from_wishlist(id) {
        Ok(listing) => Json(WishlistResponse {
            count: services.wishlist_count(),
            listing,
        })
        .into_response(),
        Err(e) => wishlist_error(e),
    }
}
