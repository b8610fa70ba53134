//! 3D viewer boundary.
//!
//! The viewer itself is an external collaborator; this module decides whether
//! a product gets an interactive model slot or the static fallback image.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use lustre_catalog::detail::VIEWER_CONTAINER_ID;
use lustre_catalog::{Product, ViewerSlot};

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("model asset not found: {0:?}")]
    MissingAsset(PathBuf),

    #[error("viewer failed: {0}")]
    Failed(String),
}

/// Mounts a model preview into a container.
#[async_trait]
pub trait ModelViewer: Send + Sync {
    async fn mount(&self, model_url: &str, container_id: &str) -> Result<ViewerSlot, ViewerError>;
}

/// glTF viewer: accepts `.glb` / `.gltf` locators.
///
/// Relative locators are resolved against `asset_root` and must exist there;
/// absolute URLs are passed through unchecked.
#[derive(Debug, Clone)]
pub struct GltfViewer {
    asset_root: Option<PathBuf>,
}

impl GltfViewer {
    pub fn new(asset_root: Option<PathBuf>) -> Self {
        Self { asset_root }
    }
}

fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://") || locator.starts_with("//")
}

fn has_gltf_extension(locator: &str) -> bool {
    let path = locator.split(['?', '#']).next().unwrap_or(locator);
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("glb") || ext.eq_ignore_ascii_case("gltf"))
        .unwrap_or(false)
}

#[async_trait]
impl ModelViewer for GltfViewer {
    async fn mount(&self, model_url: &str, container_id: &str) -> Result<ViewerSlot, ViewerError> {
        if !has_gltf_extension(model_url) {
            return Err(ViewerError::UnsupportedFormat(model_url.to_string()));
        }

        if let (false, Some(root)) = (is_remote(model_url), &self.asset_root) {
            let asset = root.join(model_url.trim_start_matches('/'));
            let exists = tokio::fs::try_exists(&asset)
                .await
                .map_err(|e| ViewerError::Failed(e.to_string()))?;
            if !exists {
                return Err(ViewerError::MissingAsset(asset));
            }
        }

        Ok(ViewerSlot::Model {
            model_url: model_url.to_string(),
            container_id: container_id.to_string(),
        })
    }
}

/// Viewer slot for `product`: the model when it mounts, otherwise the
/// fallback image. Never fails.
pub async fn resolve_viewer(product: &Product, viewer: &dyn ModelViewer) -> ViewerSlot {
    let Some(model_url) = product.model_locator() else {
        return ViewerSlot::fallback_for(product);
    };

    match viewer.mount(model_url, VIEWER_CONTAINER_ID).await {
        Ok(slot) => slot,
        Err(err) => {
            tracing::error!(product_id = %product.id, error = %err, "3D viewer error; using fallback image");
            ViewerSlot::fallback_for(product)
        }
    }
}
