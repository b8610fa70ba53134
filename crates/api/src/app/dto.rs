use serde::{Deserialize, Serialize};

use lustre_catalog::{CollectionsQuery, FilterEvent, WishlistView};

/// One-shot listing query: URL hints plus explicit filter selections.
///
/// `categories` and `metals` are comma-separated option values.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub categories: Option<String>,
    pub metals: Option<String>,
    pub max_price: Option<u64>,
}

impl ListingQuery {
    pub fn hints(&self) -> CollectionsQuery {
        CollectionsQuery::new(self.category.as_deref(), self.search.as_deref())
    }

    /// The explicit selections as the events a shopper would have produced.
    pub fn events(&self) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        for value in split_list(self.categories.as_deref()) {
            events.push(FilterEvent::CategoryToggled { value, checked: true });
        }
        for value in split_list(self.metals.as_deref()) {
            events.push(FilterEvent::MetalToggled { value, checked: true });
        }
        if let Some(value) = self.max_price {
            events.push(FilterEvent::PriceInput { value });
        }
        events
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    pub system_dark: bool,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WishlistResponse {
    pub count: usize,
    #[serde(flatten)]
    pub listing: WishlistView,
}
