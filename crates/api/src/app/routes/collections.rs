use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use lustre_catalog::{CollectionsQuery, CollectionsSession, FilterEvent};

use crate::app::{
    dto::ListingQuery,
    errors,
    extract::{ApiJson, ApiQuery},
    services::AppServices,
};

pub fn router() -> Router {
    Router::new()
        .route("/collections", get(listing))
        .route("/collections/session", get(open_session))
        .route("/collections/session/events", post(session_event))
}

/// Stateless listing: URL hints and explicit selections in one request.
pub async fn listing(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<ListingQuery>,
) -> axum::response::Response {
    let catalog = match services.catalog() {
        Ok(catalog) => catalog,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut session = CollectionsSession::new(catalog, &query.hints());
    for event in query.events() {
        if let Err(e) = session.apply(event) {
            return errors::store_error_to_response(e);
        }
    }

    Json(session.render(&services.wishlist_ids())).into_response()
}

pub async fn open_session(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<CollectionsQuery>,
) -> axum::response::Response {
    match services.open_session(&query) {
        Ok(view) => Json(view).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn session_event(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(event): ApiJson<FilterEvent>,
) -> axum::response::Response {
    match services.session_event(event) {
        Ok(view) => Json(view).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
