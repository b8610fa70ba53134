//! Dedicated wishlist listing.
//!
//! Built once from the catalogue and the stored ids. Removing an item drops
//! only that card; the filter pipeline is not re-run. The empty state is
//! shown once the store holds no ids.

use serde::Serialize;

use lustre_core::{ProductId, WishlistIds};

use crate::product::Catalog;
use crate::render::ProductCard;

pub const WISHLIST_EMPTY_MESSAGE: &str = "Your wishlist is empty.";
pub const WISHLIST_LOAD_ERROR: &str = "Could not load wishlist. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistView {
    pub cards: Vec<ProductCard>,
    pub empty_state: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistPage {
    cards: Vec<ProductCard>,
}

impl WishlistPage {
    /// Wishlisted products in feed order; ids missing from the feed are skipped.
    pub fn new(catalog: &Catalog, wishlist: &WishlistIds) -> Self {
        let cards = catalog
            .products()
            .iter()
            .filter(|p| wishlist.contains(&p.id))
            .map(|p| ProductCard::new(p, true))
            .collect();
        Self { cards }
    }

    /// Drop the card for `id`. Returns `false` if no such card was shown.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.product_id != id);
        self.cards.len() != before
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The empty state follows the stored ids, not the cards: stale ids keep
    /// the message hidden even when no card is shown.
    pub fn view(&self, stored: &WishlistIds) -> WishlistView {
        WishlistView {
            cards: self.cards.clone(),
            empty_state: stored.is_empty().then_some(WISHLIST_EMPTY_MESSAGE),
        }
    }
}
