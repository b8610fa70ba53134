use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use lustre_catalog::NotFoundView;
use lustre_contact::ValidationErrors;
use lustre_core::StoreError;
use lustre_infra::LOAD_ERROR_MESSAGE;
use lustre_storage::KvError;

pub const LOADING_MESSAGE: &str = "Loading products...";

/// Map a domain error to a response, using `unavailable_message` when the
/// catalogue failed to load.
pub fn store_error_with(err: StoreError, unavailable_message: &'static str) -> axum::response::Response {
    match err {
        StoreError::NotFound => not_found(),
        StoreError::Loading => json_error(StatusCode::SERVICE_UNAVAILABLE, "loading", LOADING_MESSAGE),
        StoreError::Unavailable(detail) => {
            tracing::warn!(%detail, "catalogue unavailable");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "catalogue_unavailable",
                unavailable_message,
            )
        }
        StoreError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        StoreError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        StoreError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    store_error_with(err, LOAD_ERROR_MESSAGE)
}

pub fn kv_error_to_response(err: KvError) -> axum::response::Response {
    tracing::error!(error = %err, "local store failure");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn validation_to_response(err: ValidationErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": err.to_string(),
            "fields": err.fields,
        })),
    )
        .into_response()
}

pub fn not_found() -> axum::response::Response {
    let view = NotFoundView::default();
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({
            "error": "not_found",
            "message": view.message,
            "back_href": view.back_href,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
