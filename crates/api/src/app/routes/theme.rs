use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{
    dto::{ThemeQuery, ThemeResponse},
    errors,
    extract::ApiQuery,
    services::AppServices,
};

pub fn router() -> Router {
    Router::new()
        .route("/theme", get(current))
        .route("/theme/toggle", post(toggle))
}

pub async fn current(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<ThemeQuery>,
) -> impl IntoResponse {
    let theme = services.theme().current(query.system_dark);
    Json(ThemeResponse {
        theme: theme.as_str(),
    })
}

pub async fn toggle(
    Extension(services): Extension<Arc<AppServices>>,
    ApiQuery(query): ApiQuery<ThemeQuery>,
) -> axum::response::Response {
    match services.theme().toggle(query.system_dark) {
        Ok(theme) => Json(ThemeResponse {
            theme: theme.as_str(),
        })
        .into_response(),
        Err(e) => errors::kv_error_to_response(e),
    }
}
