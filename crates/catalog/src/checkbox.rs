//! Checkbox-group mutual exclusion ("All" vs specific values).
//!
//! A group always has exactly one of: "All" checked alone, or one or more
//! specific options checked. It is never empty and never mixes the two.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use lustre_core::{StoreError, StoreResult};

/// Value of the distinguished first option.
pub const ALL_VALUE: &str = "all";

/// One checkbox as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

/// A filter dimension presented as checkboxes, "All" first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxGroup {
    boxes: Vec<Checkbox>,
}

impl CheckboxGroup {
    /// Build a group from its specific values; starts with "All" checked.
    ///
    /// Duplicate values and any literal `"all"` are dropped.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut boxes = vec![Checkbox {
            value: ALL_VALUE.to_string(),
            label: "All".to_string(),
            checked: true,
        }];
        for value in values {
            let value = value.into();
            if value == ALL_VALUE || boxes.iter().any(|b| b.value == value) {
                continue;
            }
            boxes.push(Checkbox {
                label: title_case(&value),
                value,
                checked: false,
            });
        }
        Self { boxes }
    }

    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.boxes
    }

    pub fn is_all_checked(&self) -> bool {
        self.boxes[0].checked
    }

    /// True if `value` is one of the group's specific options.
    pub fn knows(&self, value: &str) -> bool {
        self.specific().any(|b| b.value == value)
    }

    /// Specific values currently checked; empty exactly when "All" is checked.
    pub fn selected(&self) -> BTreeSet<String> {
        self.specific()
            .filter(|b| b.checked)
            .map(|b| b.value.clone())
            .collect()
    }

    /// Apply a user click on the box carrying `value`.
    pub fn set(&mut self, value: &str, checked: bool) -> StoreResult<()> {
        if value == ALL_VALUE {
            self.set_all(checked);
            return Ok(());
        }

        let target = self
            .boxes
            .iter_mut()
            .skip(1)
            .find(|b| b.value == value)
            .ok_or_else(|| StoreError::validation(format!("unknown filter option: {value}")))?;
        target.checked = checked;

        if checked {
            self.boxes[0].checked = false;
        }
        if self.specific().all(|b| !b.checked) {
            self.boxes[0].checked = true;
        }
        Ok(())
    }

    /// Check exactly `value`, clearing "All".
    ///
    /// Returns `false` and leaves the group untouched if `value` is unknown.
    pub fn select_only(&mut self, value: &str) -> bool {
        if !self.knows(value) {
            return false;
        }
        for b in &mut self.boxes {
            b.checked = b.value == value;
        }
        true
    }

    /// Back to "All" only.
    pub fn reset(&mut self) {
        for (i, b) in self.boxes.iter_mut().enumerate() {
            b.checked = i == 0;
        }
    }

    fn set_all(&mut self, checked: bool) {
        // Unchecking "All" with no specific box checked keeps it checked.
        if checked {
            self.reset();
        } else if self.specific().all(|b| !b.checked) {
            self.boxes[0].checked = true;
        }
    }

    fn specific(&self) -> impl Iterator<Item = &Checkbox> {
        self.boxes.iter().skip(1)
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
