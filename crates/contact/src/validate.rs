//! Field-level validation helpers shared by the storefront forms.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Local part (dotted atoms or a quoted string) `@` bracketed IPv4 or a
/// dotted domain with an alphabetic TLD of two or more letters.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email regex is valid")
});

/// Per-field error messages of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationErrors {
    pub fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    pub fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.fields.insert(field, REQUIRED_MESSAGE);
            return false;
        }
        true
    }

    pub fn require_email(&mut self, field: &'static str, value: &str) -> bool {
        if !self.require(field, value) {
            return false;
        }
        if !is_valid_email(value) {
            self.fields.insert(field, INVALID_EMAIL_MESSAGE);
            return false;
        }
        true
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Case-insensitive email shape check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(&value.to_lowercase())
}
