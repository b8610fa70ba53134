use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lustre_core::{Entity, Price, ProductId, StoreError, StoreResult};

/// Image shown when a product has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "assets/images/product-placeholder.png";

/// A catalogue record, exactly as served by the product feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub metal: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Image to show for this product, falling back to the placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Model locator, if the product has a non-blank one.
    pub fn model_locator(&self) -> Option<&str> {
        self.model_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Link to this product's detail page.
    pub fn detail_href(&self) -> String {
        format!("product.html?id={}", self.id)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// The full product list, in feed order.
///
/// Cheap to clone; the records are shared and never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalogue, rejecting feeds that repeat an id.
    pub fn new(products: Vec<Product>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(StoreError::validation(format!(
                    "duplicate product id {} in feed",
                    product.id
                )));
            }
        }
        Ok(Self {
            products: products.into(),
        })
    }

    /// Parse a catalogue from the feed's JSON array.
    pub fn from_json(raw: &str) -> StoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(raw)
            .map_err(|e| StoreError::validation(format!("malformed product feed: {e}")))?;
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Highest price in the catalogue (0 when empty).
    pub fn price_ceiling(&self) -> Price {
        self.products
            .iter()
            .map(|p| p.price)
            .max()
            .unwrap_or_default()
    }
}

/// Lifecycle of the catalogue for one run.
///
/// Created `Pending`, populated exactly once, read thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    Pending,
    Ready(Catalog),
    /// Terminal failure; carries the reason for logs, not for users.
    Failed(String),
}

impl CatalogState {
    pub fn new() -> Self {
        Self::Pending
    }

    /// Record the outcome of the one-shot fetch.
    pub fn populate(&mut self, outcome: Result<Catalog, String>) -> StoreResult<()> {
        if !matches!(self, CatalogState::Pending) {
            return Err(StoreError::conflict("catalogue already populated"));
        }
        *self = match outcome {
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(reason) => CatalogState::Failed(reason),
        };
        Ok(())
    }

    pub fn catalog(&self) -> StoreResult<&Catalog> {
        match self {
            CatalogState::Pending => Err(StoreError::Loading),
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Failed(reason) => Err(StoreError::unavailable(reason.clone())),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogState::Pending)
    }
}
