//! One-shot catalogue load into the shared application state.

use std::sync::RwLock;

use lustre_catalog::CatalogState;
use lustre_core::{StoreError, StoreResult};

use crate::source::ProductSource;

/// Message users see when the catalogue could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading products. Please try again later.";

/// Fetch the feed once and record the outcome. No retry: a failure is
/// terminal for this run.
pub async fn load_catalog(source: &dyn ProductSource, state: &RwLock<CatalogState>) -> StoreResult<()> {
    let origin = source.describe();
    tracing::info!(source = %origin, "fetching product feed");

    let outcome = match source.fetch().await {
        Ok(catalog) => {
            tracing::info!(source = %origin, products = catalog.len(), "product feed loaded");
            Ok(catalog)
        }
        Err(err) => {
            tracing::error!(source = %origin, error = %err, "Failed to fetch products");
            Err(err.to_string())
        }
    };

    let mut guard = state
        .write()
        .map_err(|_| StoreError::conflict("catalogue state lock poisoned"))?;
    guard.populate(outcome)
}
