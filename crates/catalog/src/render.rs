//! Pure rendering: visible products in, view model out.
//!
//! Every pass rebuilds the whole card list; nothing is patched in place. Cards
//! carry their product id so controls bind to identity, not to position.

use serde::Serialize;

use lustre_core::{ProductId, WishlistIds};

use crate::product::Product;

/// Shown instead of the grid when no product passes the filters.
pub const EMPTY_STATE_MESSAGE: &str = "No products found matching your criteria.";

/// One product card in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub product_id: ProductId,
    pub name: String,
    pub href: String,
    pub image_url: String,
    pub image_alt: String,
    pub price_label: String,
    /// Initial state of the wishlist toggle.
    pub wishlisted: bool,
}

impl ProductCard {
    pub fn new(product: &Product, wishlisted: bool) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            href: product.detail_href(),
            image_url: product.image_or_placeholder().to_string(),
            image_alt: product.name.clone(),
            price_label: product.price.label(),
            wishlisted,
        }
    }
}

/// A rendered listing: either cards or the empty-state message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub cards: Vec<ProductCard>,
    pub empty_state: Option<&'static str>,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: ProductId) -> Option<&ProductCard> {
        self.cards.iter().find(|c| c.product_id == id)
    }
}

/// Render `products` in order, reading `wishlist` once for the whole pass.
pub fn render(products: &[&Product], wishlist: &WishlistIds) -> CatalogView {
    if products.is_empty() {
        return CatalogView {
            cards: Vec::new(),
            empty_state: Some(EMPTY_STATE_MESSAGE),
        };
    }

    let cards = products
        .iter()
        .map(|p| ProductCard::new(p, wishlist.contains(&p.id)))
        .collect();
    CatalogView {
        cards,
        empty_state: None,
    }
}
