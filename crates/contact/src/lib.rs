//! Storefront forms: contact page and contact-to-buy enquiries.
//!
//! Validation is field-level and non-fatal: a failed attempt returns every
//! invalid field with its message and never panics.

pub mod forms;
pub mod validate;

pub use forms::{
    ContactForm, EnquiryForm, Submission, SubmissionKind, submit_contact, submit_enquiry,
};
pub use validate::{ValidationErrors, is_valid_email};
