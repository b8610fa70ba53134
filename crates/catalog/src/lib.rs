//! Catalogue filter-render engine.
//!
//! This crate contains the storefront's listing logic, implemented purely as
//! deterministic functions over an in-memory catalogue (no IO, no HTTP, no
//! storage). Adapters turn the view models into actual UI.

pub mod checkbox;
pub mod detail;
pub mod filter;
pub mod product;
pub mod query;
pub mod render;
pub mod session;
pub mod wishlist_page;

pub use checkbox::{ALL_VALUE, Checkbox, CheckboxGroup};
pub use detail::{NotFoundView, ProductDetailView, ViewerSlot};
pub use filter::FilterState;
pub use product::{Catalog, CatalogState, Product};
pub use query::{CollectionsQuery, DetailQuery};
pub use render::{CatalogView, EMPTY_STATE_MESSAGE, ProductCard, render};
pub use session::{CollectionsSession, CollectionsView, FilterEvent, PriceSlider};
pub use wishlist_page::{WishlistPage, WishlistView};
