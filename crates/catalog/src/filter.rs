//! Filter predicate evaluation.
//!
//! Every dimension is an independent predicate; a product is visible iff it
//! passes all active ones. Inactive predicates are the identity filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use lustre_core::Price;

use crate::product::Product;

/// Snapshot of every filter input, derived fresh for each pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Lowercased search term; empty means no search restriction.
    pub search_term: String,
    /// Empty means "All".
    pub selected_categories: BTreeSet<String>,
    /// Empty means "All".
    pub selected_metals: BTreeSet<String>,
    /// Inclusive price ceiling.
    pub max_price: Price,
}

impl FilterState {
    /// Identity state for a catalogue whose highest price is `ceiling`.
    pub fn unrestricted(ceiling: Price) -> Self {
        Self {
            max_price: ceiling,
            ..Self::default()
        }
    }

    /// Set the search term, normalising it to lowercase.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search_term = term.to_lowercase();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metals<I, S>(mut self, metals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_metals = metals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_price(mut self, max_price: Price) -> Self {
        self.max_price = max_price;
        self
    }

    /// True if `product` passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_term(product, &self.search_term.to_lowercase())
    }

    /// `matches` with the search term already lowercased.
    fn matches_with_term(&self, product: &Product, term: &str) -> bool {
        matches_search(product, term)
            && matches_selection(&product.category, &self.selected_categories)
            && matches_selection(&product.metal, &self.selected_metals)
            && product.price <= self.max_price
    }
}

fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    [&product.name, &product.category, &product.metal]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

fn matches_selection(value: &str, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Ordered subsequence of `products` visible under `state`.
pub fn apply<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let term = state.search_term.to_lowercase();
    let visible: Vec<&Product> = products
        .iter()
        .filter(|p| state.matches_with_term(p, &term))
        .collect();
    tracing::trace!(
        total = products.len(),
        visible = visible.len(),
        "filter pass"
    );
    visible
}
