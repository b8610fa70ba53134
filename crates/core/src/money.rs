//! Catalogue prices and their display format.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Currency symbol prefixed to every displayed price.
pub const CURRENCY_SYMBOL: &str = "\u{20B9}";

/// A catalogue price, stored as a whole number in the catalogue's unit.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Display label: currency symbol followed by the grouped amount.
    pub fn label(self) -> String {
        format!("{CURRENCY_SYMBOL}{}", group_indian(self.0))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Group digits the way the `en-IN` locale does: the last three digits form
/// one group, every group above that has two digits (`12,34,567`).
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
