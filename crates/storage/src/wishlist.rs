//! Persisted wishlist: a set of product ids under one fixed key.

use std::sync::Mutex;

use lustre_core::{ProductId, WishlistIds};

use crate::kv::{KeyValueStore, KvError};

pub const WISHLIST_KEY: &str = "wishlist";

/// Outcome of a toggle, with the count the header badge should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ToggleOutcome {
    /// `true` if the id was added, `false` if it was removed.
    pub added: bool,
    pub count: usize,
}

#[derive(Debug)]
pub struct WishlistStore<S> {
    kv: S,
    toggle_lock: Mutex<()>,
}

impl<S: KeyValueStore> WishlistStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            toggle_lock: Mutex::new(()),
        }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Current ids. Absent, unreadable or malformed values read as empty.
    pub fn ids(&self) -> WishlistIds {
        let raw = match self.kv.get(WISHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return WishlistIds::new(),
            Err(err) => {
                tracing::warn!(error = %err, "wishlist read failed; treating as empty");
                return WishlistIds::new();
            }
        };
        match serde_json::from_str::<Vec<ProductId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                tracing::warn!(error = %err, "malformed wishlist value; treating as empty");
                WishlistIds::new()
            }
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids().contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids().len()
    }

    /// Remove `id` if present, add it otherwise; the stored value is rewritten
    /// in full.
    pub fn toggle(&self, id: ProductId) -> Result<ToggleOutcome, KvError> {
        let _guard = self.toggle_lock.lock().map_err(|_| KvError::Poisoned)?;

        let mut ids = self.ids();
        let added = if ids.remove(&id) {
            false
        } else {
            ids.insert(id);
            true
        };

        let encoded = encode(&ids)?;
        self.kv.set(WISHLIST_KEY, &encoded)?;
        tracing::info!(product_id = %id, added, count = ids.len(), "wishlist toggled");

        Ok(ToggleOutcome {
            added,
            count: ids.len(),
        })
    }

    /// Remove `id` if present; never adds. Returns `true` if it was removed.
    /// The check and the write share the toggle lock.
    pub fn remove(&self, id: ProductId) -> Result<bool, KvError> {
        let _guard = self.toggle_lock.lock().map_err(|_| KvError::Poisoned)?;

        let mut ids = self.ids();
        if !ids.remove(&id) {
            return Ok(false);
        }

        self.kv.set(WISHLIST_KEY, &encode(&ids)?)?;
        tracing::info!(product_id = %id, count = ids.len(), "wishlist item removed");
        Ok(true)
    }
}

fn encode(ids: &WishlistIds) -> Result<String, KvError> {
    serde_json::to_string(ids).map_err(|e| KvError::Encode(e.to_string()))
}
