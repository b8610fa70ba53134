//! Infrastructure for the storefront: product feed sources, the one-shot
//! catalogue loader and the 3D viewer boundary.

pub mod loader;
pub mod source;
pub mod viewer;

pub use loader::{LOAD_ERROR_MESSAGE, load_catalog};
pub use source::{FileProductSource, HttpProductSource, ProductSource, SourceError, StaticProductSource};
pub use viewer::{GltfViewer, ModelViewer, ViewerError, resolve_viewer};
