//! Product data sources: one-shot fetch of the whole feed.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use lustre_catalog::Catalog;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read product feed {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("product feed request failed: {0}")]
    Transport(String),

    #[error("invalid product feed: {0}")]
    Invalid(String),
}

/// Where the catalogue comes from. Fetched once per run; no pagination.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch(&self) -> Result<Catalog, SourceError>;

    /// Stable description for logs.
    fn describe(&self) -> String;
}

/// Static JSON file on local disk.
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileProductSource {
    async fn fetch(&self) -> Result<Catalog, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Catalog::from_json(&raw).map_err(|e| SourceError::Invalid(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Static JSON resource served over HTTP (GET, no query parameters).
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> Result<Catalog, SourceError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let raw = res
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Catalog::from_json(&raw).map_err(|e| SourceError::Invalid(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Fixed catalogue, for tests and demos.
#[derive(Debug, Clone)]
pub struct StaticProductSource {
    catalog: Catalog,
}

impl StaticProductSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch(&self) -> Result<Catalog, SourceError> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} products", self.catalog.len())
    }
}
