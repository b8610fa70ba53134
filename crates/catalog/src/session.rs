//! Page state of the collections listing.
//!
//! Owns every filter input. Each event mutates exactly one input, after which
//! the caller runs a full filter-and-render pass via [`CollectionsSession::render`].

use serde::{Deserialize, Serialize};

use lustre_core::{Price, StoreResult, WishlistIds};

use crate::checkbox::{Checkbox, CheckboxGroup};
use crate::filter::{self, FilterState};
use crate::product::{Catalog, Product};
use crate::query::CollectionsQuery;
use crate::render::{self, CatalogView};

/// Price range input whose ceiling is the dearest product in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSlider {
    ceiling: Price,
    value: Price,
}

impl PriceSlider {
    pub fn new(ceiling: Price) -> Self {
        Self {
            ceiling,
            value: ceiling,
        }
    }

    pub fn value(&self) -> Price {
        self.value
    }

    pub fn ceiling(&self) -> Price {
        self.ceiling
    }

    /// Move the slider; values above the ceiling are clamped.
    pub fn set(&mut self, value: Price) {
        self.value = value.min(self.ceiling);
    }

    pub fn reset(&mut self) {
        self.value = self.ceiling;
    }
}

/// A single user interaction on the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterEvent {
    SearchInput { term: String },
    CategoryToggled { value: String, checked: bool },
    MetalToggled { value: String, checked: bool },
    PriceInput { value: u64 },
    ClearFilters,
}

/// Filter sidebar as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiltersView {
    pub search: String,
    pub categories: Vec<Checkbox>,
    pub metals: Vec<Checkbox>,
    pub max_price: Price,
    pub price_ceiling: Price,
    pub price_label: String,
}

/// Everything one pass produces for the listing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionsView {
    pub filters: FiltersView,
    pub listing: CatalogView,
}

#[derive(Debug, Clone)]
pub struct CollectionsSession {
    catalog: Catalog,
    categories: CheckboxGroup,
    metals: CheckboxGroup,
    search_input: String,
    price: PriceSlider,
}

impl CollectionsSession {
    /// Create the session, with filter options taken from the catalogue and
    /// the URL hints applied once.
    pub fn new(catalog: Catalog, query: &CollectionsQuery) -> Self {
        let categories = distinct(catalog.products(), |p| &p.category);
        let metals = distinct(catalog.products(), |p| &p.metal);
        Self::with_options(catalog, categories, metals, query)
    }

    /// Like [`CollectionsSession::new`] with explicit option lists.
    pub fn with_options(
        catalog: Catalog,
        categories: Vec<String>,
        metals: Vec<String>,
        query: &CollectionsQuery,
    ) -> Self {
        let price = PriceSlider::new(catalog.price_ceiling());
        let mut session = Self {
            catalog,
            categories: CheckboxGroup::new(categories),
            metals: CheckboxGroup::new(metals),
            search_input: String::new(),
            price,
        };

        if let Some(category) = query.category() {
            if !session.categories.select_only(category) {
                tracing::debug!(category, "ignoring unknown category in URL");
            }
        }
        if let Some(search) = query.search() {
            session.search_input = search.to_string();
        }
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &CheckboxGroup {
        &self.categories
    }

    pub fn metals(&self) -> &CheckboxGroup {
        &self.metals
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn price(&self) -> &PriceSlider {
        &self.price
    }

    pub fn apply(&mut self, event: FilterEvent) -> StoreResult<()> {
        tracing::debug!(?event, "collections filter event");
        match event {
            FilterEvent::SearchInput { term } => self.search_input = term,
            FilterEvent::CategoryToggled { value, checked } => {
                self.categories.set(&value, checked)?
            }
            FilterEvent::MetalToggled { value, checked } => self.metals.set(&value, checked)?,
            FilterEvent::PriceInput { value } => self.price.set(Price::new(value)),
            FilterEvent::ClearFilters => {
                self.categories.reset();
                self.metals.reset();
                self.price.reset();
                self.search_input.clear();
            }
        }
        Ok(())
    }

    /// Snapshot of the current inputs.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search_term: self.search_input.to_lowercase(),
            selected_categories: self.categories.selected(),
            selected_metals: self.metals.selected(),
            max_price: self.price.value(),
        }
    }

    pub fn visible(&self) -> Vec<&Product> {
        filter::apply(self.catalog.products(), &self.filter_state())
    }

    /// Full filter-and-render pass.
    pub fn render(&self, wishlist: &WishlistIds) -> CollectionsView {
        let listing = render::render(&self.visible(), wishlist);
        CollectionsView {
            filters: FiltersView {
                search: self.search_input.clone(),
                categories: self.categories.checkboxes().to_vec(),
                metals: self.metals.checkboxes().to_vec(),
                max_price: self.price.value(),
                price_ceiling: self.price.ceiling(),
                price_label: self.price.value().label(),
            },
            listing,
        }
    }
}

/// Distinct values of `field` in order of first appearance.
fn distinct<F>(products: &[Product], field: F) -> Vec<String>
where
    F: Fn(&Product) -> &String,
{
    let mut out: Vec<String> = Vec::new();
    for p in products {
        let value = field(p);
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::*;
    use crate::render::EMPTY_STATE_MESSAGE;
    use lustre_core::ProductId;

    fn visible_ids(session: &CollectionsSession) -> Vec<u64> {
        session.visible().iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn default_session_shows_full_catalogue() {
        let session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        assert_eq!(visible_ids(&session), vec![1, 2]);
        assert!(session.categories().is_all_checked());
        assert_eq!(session.price().value(), Price::new(15000));
    }

    #[test]
    fn options_come_from_catalogue_in_feed_order() {
        let session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        let values: Vec<&str> = session
            .metals()
            .checkboxes()
            .iter()
            .map(|b| b.value.as_str())
            .collect();
        assert_eq!(values, vec!["all", "gold", "silver"]);
    }

    #[test]
    fn url_category_prechecks_that_category_only() {
        let query = CollectionsQuery::new(Some("necklaces"), None);
        let session = CollectionsSession::new(ring_and_necklace(), &query);
        assert!(!session.categories().is_all_checked());
        assert_eq!(visible_ids(&session), vec![2]);
    }

    #[test]
    fn unknown_url_category_keeps_all() {
        let query = CollectionsQuery::new(Some("tiaras"), None);
        let session = CollectionsSession::new(ring_and_necklace(), &query);
        assert!(session.categories().is_all_checked());
        assert_eq!(visible_ids(&session), vec![1, 2]);
    }

    #[test]
    fn url_search_prefills_input() {
        let query = CollectionsQuery::new(None, Some("Silver"));
        let session = CollectionsSession::new(ring_and_necklace(), &query);
        assert_eq!(session.search_input(), "Silver");
        assert_eq!(visible_ids(&session), vec![2]);
    }

    #[test]
    fn price_input_limits_listing() {
        let mut session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        session.apply(FilterEvent::PriceInput { value: 10000 }).unwrap();
        assert_eq!(visible_ids(&session), vec![1]);

        let view = session.render(&WishlistIds::new());
        assert_eq!(view.filters.price_label, "₹10,000");
    }

    #[test]
    fn price_input_is_clamped_to_ceiling() {
        let mut session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        session.apply(FilterEvent::PriceInput { value: 1_000_000 }).unwrap();
        assert_eq!(session.price().value(), Price::new(15000));
    }

    #[test]
    fn unmatched_search_renders_empty_state() {
        let mut session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        session
            .apply(FilterEvent::SearchInput {
                term: "platinum".to_string(),
            })
            .unwrap();
        let view = session.render(&WishlistIds::new());
        assert!(view.listing.cards.is_empty());
        assert_eq!(view.listing.empty_state, Some(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn clear_filters_restores_identity() {
        let query = CollectionsQuery::new(Some("rings"), Some("gold"));
        let mut session = CollectionsSession::new(ring_and_necklace(), &query);
        session
            .apply(FilterEvent::MetalToggled {
                value: "silver".to_string(),
                checked: true,
            })
            .unwrap();
        session.apply(FilterEvent::PriceInput { value: 1 }).unwrap();
        assert!(visible_ids(&session).is_empty());

        session.apply(FilterEvent::ClearFilters).unwrap();
        assert_eq!(visible_ids(&session), vec![1, 2]);
        assert_eq!(session.search_input(), "");
        assert!(session.metals().is_all_checked());
        assert_eq!(
            session.filter_state(),
            FilterState::unrestricted(Price::new(15000))
        );
    }

    #[test]
    fn unknown_option_event_is_rejected_without_change() {
        let mut session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        let err = session.apply(FilterEvent::CategoryToggled {
            value: "tiaras".to_string(),
            checked: true,
        });
        assert!(err.is_err());
        assert_eq!(visible_ids(&session), vec![1, 2]);
    }

    #[test]
    fn render_marks_wishlisted_cards() {
        let session = CollectionsSession::new(ring_and_necklace(), &CollectionsQuery::default());
        let wishlist: WishlistIds = [ProductId::new(1)].into_iter().collect();
        let view = session.render(&wishlist);
        assert!(view.listing.card(ProductId::new(1)).unwrap().wishlisted);
        assert!(!view.listing.card(ProductId::new(2)).unwrap().wishlisted);
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: FilterEvent =
            serde_json::from_str(r#"{"type":"category_toggled","value":"rings","checked":true}"#)
                .unwrap();
        assert_eq!(
            event,
            FilterEvent::CategoryToggled {
                value: "rings".to_string(),
                checked: true
            }
        );
        let event: FilterEvent = serde_json::from_str(r#"{"type":"clear_filters"}"#).unwrap();
        assert_eq!(event, FilterEvent::ClearFilters);
    }
}
