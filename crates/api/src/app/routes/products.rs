use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use lustre_catalog::{DetailQuery, ProductDetailView};
use lustre_core::ProductId;
use lustre_infra::resolve_viewer;

use crate::app::{
    errors,
    extract::{ApiPath, ApiQuery},
    services::AppServices,
};

pub fn router() -> Router {
    Router::new()
        .route("/products/:id", get(get_by_path))
        .route("/product", get(get_by_query))
}

pub async fn get_by_path(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(id): ApiPath<String>,
) -> axum::response::Response {
    detail(&services, id.parse().ok()).await
}

/// Detail page addressed the way the listing links to it (`?id=`).
pub async fn get_by_query(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<DetailQuery>,
) -> axum::response::Response {
    detail(&services, query.product_id()).await
}

async fn detail(services: &AppServices, id: Option<ProductId>) -> axum::response::Response {
    let product = match services.product(id) {
        Ok(product) => product,
        Err(e) => return errors::store_error_to_response(e),
    };

    let viewer = resolve_viewer(&product, services.viewer()).await;
    Json(ProductDetailView::new(&product, &services.wishlist_ids(), viewer)).into_response()
}
