//! Contact page form and the detail page's contact-to-buy enquiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::ValidationErrors;

pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const ENQUIRY_SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you shortly.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Every field is re-checked on each attempt; all failures are reported.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require_email("email", &self.email);
        errors.require("subject", &self.subject);
        errors.require("message", &self.message);
        errors.into_result()
    }
}

/// Contact-to-buy enquiry about one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// SKU of the product the enquiry was opened from.
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EnquiryForm {
    pub fn for_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            ..Self::default()
        }
    }

    /// Presence only; the email shape is not checked on enquiries.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require("email", &self.email);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Contact,
    Enquiry,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub kind: SubmissionKind,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

pub fn submit_contact(form: &ContactForm, now: DateTime<Utc>) -> Result<Submission, ValidationErrors> {
    form.validate()?;
    let submission = Submission {
        id: Uuid::now_v7(),
        kind: SubmissionKind::Contact,
        received_at: now,
        message: CONTACT_SUCCESS_MESSAGE.to_string(),
    };
    tracing::info!(
        submission_id = %submission.id,
        name = %form.name,
        email = %form.email,
        subject = %form.subject,
        "contact form submitted"
    );
    Ok(submission)
}

pub fn submit_enquiry(form: &EnquiryForm, now: DateTime<Utc>) -> Result<Submission, ValidationErrors> {
    form.validate()?;
    let submission = Submission {
        id: Uuid::now_v7(),
        kind: SubmissionKind::Enquiry,
        received_at: now,
        message: ENQUIRY_SUCCESS_MESSAGE.to_string(),
    };
    tracing::info!(
        submission_id = %submission.id,
        sku = %form.sku,
        email = %form.email,
        "product enquiry submitted"
    );
    Ok(submission)
}
