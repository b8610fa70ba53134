use axum::{response::IntoResponse, routing::post, Json, Router};
use chrono::Utc;

use lustre_contact::{ContactForm, EnquiryForm, submit_contact, submit_enquiry};

use crate::app::{errors, extract::ApiJson};

pub fn router() -> Router {
    Router::new()
        .route("/contact", post(contact))
        .route("/enquiry", post(enquiry))
}

pub async fn contact(ApiJson(form): ApiJson<ContactForm>) -> axum::response::Response {
    match submit_contact(&form, Utc::now()) {
        Ok(ack) => Json(ack).into_response(),
        Err(fields) => errors::validation_to_response(fields),
    }
}

pub async fn enquiry(ApiJson(form): ApiJson<EnquiryForm>) -> axum::response::Response {
    match submit_enquiry(&form, Utc::now()) {
        Ok(ack) => Json(ack).into_response(),
        Err(fields) => errors::validation_to_response(fields),
    }
}
