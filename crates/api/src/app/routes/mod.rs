use axum::Router;

pub mod collections;
pub mod forms;
pub mod products;
pub mod search;
pub mod system;
pub mod theme;
pub mod wishlist;

/// Router for the storefront endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .merge(collections::router())
        .merge(products::router())
        .merge(wishlist::router())
        .merge(search::router())
        .merge(theme::router())
        .merge(forms::router())
}
