//! Runtime configuration.
//!
//! Layered: built-in defaults, then `lustre.toml` in the working directory,
//! then `LUSTRE_*` environment variables.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

use lustre_observability::LogFormat;

pub const CONFIG_FILE: &str = "lustre.toml";
pub const ENV_PREFIX: &str = "LUSTRE_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Local JSON feed. Ignored when `product_url` is set.
    pub product_file: PathBuf,
    /// Remote JSON feed.
    pub product_url: Option<String>,
    /// Where the wishlist and theme are persisted. In-memory when unset.
    pub store_file: Option<PathBuf>,
    /// Root that relative 3D model locators are checked against.
    pub asset_root: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            product_file: PathBuf::from("data/products.json"),
            product_url: None,
            store_file: None,
            asset_root: None,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}
