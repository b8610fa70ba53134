//! Product detail surface.

use serde::Serialize;

use lustre_core::{ProductId, StoreError, StoreResult, WishlistIds};

use crate::product::{Catalog, Product};

pub const STORE_NAME: &str = "Lustre Jewels";
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";
pub const BACK_TO_LISTING_HREF: &str = "collections.html";
/// DOM id of the container the viewer mounts into.
pub const VIEWER_CONTAINER_ID: &str = "product-viewer-container";

/// What occupies the viewer area of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewerSlot {
    /// Interactive 3D preview.
    Model { model_url: String, container_id: String },
    /// Static image used when there is no model or the viewer failed.
    Fallback { image_url: String, alt: String },
}

impl ViewerSlot {
    pub fn fallback_for(product: &Product) -> Self {
        ViewerSlot::Fallback {
            image_url: product.image_or_placeholder().to_string(),
            alt: product.name.clone(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ViewerSlot::Fallback { .. })
    }
}

/// Label of the wishlist button for the given membership.
pub fn wishlist_button_label(wishlisted: bool) -> &'static str {
    if wishlisted {
        "Remove from Wishlist"
    } else {
        "Add to Wishlist"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    pub product_id: ProductId,
    pub title: String,
    pub name: String,
    pub sku: String,
    pub price_label: String,
    pub description: String,
    pub wishlisted: bool,
    pub wishlist_label: &'static str,
    pub viewer: ViewerSlot,
}

impl ProductDetailView {
    pub fn new(product: &Product, wishlist: &WishlistIds, viewer: ViewerSlot) -> Self {
        let wishlisted = wishlist.contains(&product.id);
        Self {
            product_id: product.id,
            title: format!("{} - {STORE_NAME}", product.name),
            name: product.name.clone(),
            sku: product.sku.clone(),
            price_label: product.price.label(),
            description: product.description.clone(),
            wishlisted,
            wishlist_label: wishlist_button_label(wishlisted),
            viewer,
        }
    }
}

/// Not-found body with a link back to the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    pub message: &'static str,
    pub back_href: &'static str,
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE,
            back_href: BACK_TO_LISTING_HREF,
        }
    }
}

/// Resolve the requested id against the catalogue.
pub fn lookup(catalog: &Catalog, id: Option<ProductId>) -> StoreResult<&Product> {
    let id = id.ok_or(StoreError::NotFound)?;
    catalog.get(id).ok_or(StoreError::NotFound)
}
