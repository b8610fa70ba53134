//! Storefront state shared by all handlers.
//!
//! One server process acts for one shopper, mirroring the browser's
//! per-user storage: the wishlist, theme and the open listing sessions are
//! process-wide.

use std::sync::{Arc, Mutex, RwLock};

use lustre_catalog::{
    Catalog, CatalogState, CollectionsQuery, CollectionsSession, CollectionsView, FilterEvent,
    Product, WishlistPage, WishlistView,
};
use lustre_core::{ProductId, StoreError, StoreResult, WishlistIds};
use lustre_infra::{
    FileProductSource, GltfViewer, HttpProductSource, ModelViewer, ProductSource, load_catalog,
};
use lustre_storage::{
    InMemoryKeyValueStore, JsonFileStore, KeyValueStore, KvError, ThemePreference, ToggleOutcome,
    WishlistStore,
};

use crate::config::AppConfig;

pub type SharedStore = Arc<dyn KeyValueStore>;

pub struct AppServices {
    catalog: RwLock<CatalogState>,
    session: Mutex<Option<CollectionsSession>>,
    wishlist_page: Mutex<Option<WishlistPage>>,
    wishlist: WishlistStore<SharedStore>,
    theme: ThemePreference<SharedStore>,
    viewer: Arc<dyn ModelViewer>,
}

impl AppServices {
    pub fn new(store: SharedStore, viewer: Arc<dyn ModelViewer>) -> Self {
        Self {
            catalog: RwLock::new(CatalogState::new()),
            session: Mutex::new(None),
            wishlist_page: Mutex::new(None),
            wishlist: WishlistStore::new(store.clone()),
            theme: ThemePreference::new(store),
            viewer,
        }
    }

    /// In-memory store and a glTF viewer without an asset root.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(GltfViewer::new(None)),
        )
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store: SharedStore = match &config.store_file {
            Some(path) => Arc::new(JsonFileStore::new(path)),
            None => Arc::new(InMemoryKeyValueStore::new()),
        };
        Self::new(store, Arc::new(GltfViewer::new(config.asset_root.clone())))
    }

    // -------------------------
    // Catalogue
    // -------------------------

    /// Load the catalogue once. Later calls are refused.
    pub async fn load(&self, source: &dyn ProductSource) -> StoreResult<()> {
        load_catalog(source, &self.catalog).await
    }

    /// The loaded catalogue; `Loading` until the fetch settles.
    pub fn catalog(&self) -> StoreResult<Catalog> {
        let state = self
            .catalog
            .read()
            .map_err(|_| StoreError::unavailable("catalogue state lock poisoned"))?;
        state.catalog().cloned()
    }

    pub fn product(&self, id: Option<ProductId>) -> StoreResult<Product> {
        let catalog = self.catalog()?;
        lustre_catalog::detail::lookup(&catalog, id).cloned()
    }

    pub fn viewer(&self) -> &dyn ModelViewer {
        self.viewer.as_ref()
    }

    // -------------------------
    // Collections
    // -------------------------

    /// Start a fresh listing session from the URL hints, replacing any open one.
    pub fn open_session(&self, query: &CollectionsQuery) -> StoreResult<CollectionsView> {
        let session = CollectionsSession::new(self.catalog()?, query);
        let view = session.render(&self.wishlist.ids());
        *lock(&self.session)? = Some(session);
        Ok(view)
    }

    /// Apply one event to the open session, opening a default one if needed.
    pub fn session_event(&self, event: FilterEvent) -> StoreResult<CollectionsView> {
        let mut guard = lock(&self.session)?;
        let session = match guard.as_mut() {
            Some(session) => session,
            None => guard.insert(CollectionsSession::new(
                self.catalog()?,
                &CollectionsQuery::default(),
            )),
        };
        session.apply(event)?;
        Ok(session.render(&self.wishlist.ids()))
    }

    // -------------------------
    // Wishlist
    // -------------------------

    pub fn wishlist_ids(&self) -> WishlistIds {
        self.wishlist.ids()
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.count()
    }

    pub fn toggle_wishlist(&self, id: ProductId) -> Result<ToggleOutcome, KvError> {
        self.wishlist.toggle(id)
    }

    /// Build the wishlist listing from the current catalogue and ids.
    pub fn open_wishlist(&self) -> StoreResult<WishlistView> {
        let stored = self.wishlist.ids();
        let page = WishlistPage::new(&self.catalog()?, &stored);
        let view = page.view(&stored);
        *lock(&self.wishlist_page)? = Some(page);
        Ok(view)
    }

    /// Remove `id` from the stored wishlist and drop its card from the open
    /// listing without rebuilding it.
    pub fn remove_from_wishlist(&self, id: ProductId) -> StoreResult<WishlistView> {
        self.wishlist
            .remove(id)
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        let stored = self.wishlist.ids();
        let mut guard = lock(&self.wishlist_page)?;
        let page = match guard.as_mut() {
            Some(page) => page,
            None => guard.insert(WishlistPage::new(&self.catalog()?, &stored)),
        };
        page.remove(id);
        Ok(page.view(&stored))
    }

    // -------------------------
    // Theme
    // -------------------------

    pub fn theme(&self) -> &ThemePreference<SharedStore> {
        &self.theme
    }
}

/// Product feed selected by configuration: the URL when set, else the file.
pub fn product_source(config: &AppConfig) -> Box<dyn ProductSource> {
    match &config.product_url {
        Some(url) => Box::new(HttpProductSource::new(url.clone())),
        None => Box::new(FileProductSource::new(config.product_file.clone())),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> StoreResult<std::sync::MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| StoreError::unavailable("session lock poisoned"))
}
