//! Storefront configuration parsed from environment variables.

use std::path::PathBuf;

use crate::loader::{CatalogSource, FetchTimeouts};

pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:8080/data/products.json";
pub const DEFAULT_STORE_PATH: &str = "storefront-store.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("catalog URL and catalog path are both set; choose one")]
    ConflictingSources,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub source: CatalogSource,
    pub store_path: PathBuf,
    pub timeouts: FetchTimeouts,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub catalog_url: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub store_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `STOREFRONT_CATALOG_URL`: default `http://127.0.0.1:8080/data/products.json`
    /// - `STOREFRONT_CATALOG_PATH`: local JSON file instead of a URL
    /// - `STOREFRONT_STORE_PATH`: wishlist store file, default `storefront-store.json`
    /// - `STOREFRONT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `STOREFRONT_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(ConfigOverrides::default())
    }

    /// Like [`Self::from_env`], with command-line values winning.
    ///
    /// A catalog source given on the command line replaces both catalog
    /// variables, so a conflict between them is only reported when nothing
    /// on the command line settles it.
    pub fn from_env_with(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let source = match resolve_source(overrides.catalog_url.as_deref(), overrides.catalog_path)? {
            Some(source) => source,
            None => env_source()?,
        };

        let store_path = overrides.store_path.unwrap_or_else(|| {
            std::env::var("STOREFRONT_STORE_PATH").map_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from)
        });
        let timeouts = FetchTimeouts {
            request_secs: env_parse_u64("STOREFRONT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("STOREFRONT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { source, store_path, timeouts })
    }
}

fn env_source() -> Result<CatalogSource, ConfigError> {
    let url = std::env::var("STOREFRONT_CATALOG_URL").ok();
    let path = std::env::var("STOREFRONT_CATALOG_PATH").ok().map(PathBuf::from);
    match resolve_source(url.as_deref(), path)? {
        Some(source) => Ok(source),
        None => default_source(),
    }
}

fn resolve_source(url: Option<&str>, path: Option<PathBuf>) -> Result<Option<CatalogSource>, ConfigError> {
    match (url, path) {
        (Some(_), Some(_)) => Err(ConfigError::ConflictingSources),
        (Some(url), None) => parse_url(url).map(Some),
        (None, Some(path)) => Ok(Some(CatalogSource::File(path))),
        (None, None) => Ok(None),
    }
}

fn default_source() -> Result<CatalogSource, ConfigError> {
    parse_url(DEFAULT_CATALOG_URL)
}

fn parse_url(raw: &str) -> Result<CatalogSource, ConfigError> {
    let url = reqwest::Url::parse(raw)
        .map_err(|e| ConfigError::InvalidUrl { url: raw.to_owned(), reason: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(CatalogSource::Url(url)),
        other => Err(ConfigError::InvalidUrl { url: raw.to_owned(), reason: format!("unsupported scheme '{other}'") }),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
