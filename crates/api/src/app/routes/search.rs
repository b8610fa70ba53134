use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use reqwest::Url;

use crate::app::{dto::SearchQuery, errors, extract::ApiQuery};

/// Base used only to drive the URL encoder; the origin is stripped again.
const COLLECTIONS_URL: &str = "http://storefront.invalid/collections";

pub fn router() -> Router {
    Router::new().route("/search", get(redirect))
}

/// Relative listing URL pre-filled with `term`.
pub fn collections_location(term: &str) -> Option<String> {
    let url = Url::parse_with_params(COLLECTIONS_URL, &[("search", term)]).ok()?;
    Some(format!("{}?{}", url.path(), url.query()?))
}

pub async fn redirect(ApiQuery(query): ApiQuery<SearchQuery>) -> axum::response::Response {
    let Some(term) = query.q.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    match collections_location(term) {
        Some(location) => {
            tracing::debug!(term, %location, "search redirect");
            Redirect::to(&location).into_response()
        }
        None => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "redirect_error",
            "could not build search URL",
        ),
    }
}
