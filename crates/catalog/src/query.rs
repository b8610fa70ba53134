//! Navigation query parameters consumed by the storefront surfaces.

use serde::{Deserialize, Serialize};

use lustre_core::ProductId;

/// Initial filter hints carried by the listing URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl CollectionsQuery {
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    /// Category to pre-check, if one was given.
    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    /// Search term to pre-fill, verbatim, if one was given.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|v| !v.is_empty())
    }
}

/// Query of the detail surface (`?id=`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl DetailQuery {
    /// The requested id; absent or non-numeric ids yield `None`.
    pub fn product_id(&self) -> Option<ProductId> {
        self.id.as_deref()?.parse().ok()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_parameters_count_as_absent() {
        let q = CollectionsQuery::new(Some("  "), Some(""));
        assert_eq!(q.category(), None);
        assert_eq!(q.search(), None);
    }

    #[test]
    fn search_hint_is_prefilled_verbatim() {
        let q = CollectionsQuery::new(None, Some("  gold "));
        assert_eq!(q.search(), Some("  gold "));
        assert_eq!(CollectionsQuery::new(None, Some("   ")).search(), Some("   "));
    }

    #[test]
    fn present_parameters_are_passed_through() {
        let q = CollectionsQuery::new(Some("rings"), Some("Gold"));
        assert_eq!(q.category(), Some("rings"));
        assert_eq!(q.search(), Some("Gold"));
    }

    #[test]
    fn detail_id_must_be_numeric() {
        let q = |id: Option<&str>| DetailQuery {
            id: id.map(str::to_string),
        };
        assert_eq!(q(Some("12")).product_id(), Some(ProductId::new(12)));
        assert_eq!(q(Some("12abc")).product_id(), None);
        assert_eq!(q(None).product_id(), None);
    }
}
