//! `lustre-core`: storefront foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{StoreError, StoreResult};
pub use id::{ProductId, WishlistIds};
pub use money::{CURRENCY_SYMBOL, Price};
pub use value_object::ValueObject;
