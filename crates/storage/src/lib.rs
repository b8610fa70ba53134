//! Local key-value persistence for the storefront (wishlist, theme).

pub mod kv;
pub mod theme;
pub mod wishlist;

pub use kv::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore, KvError};
pub use theme::{Theme, ThemePreference};
pub use wishlist::{ToggleOutcome, WishlistStore};
