//! Native catalog loader.
//!
//! DESIGN
//! ======
//! One request per session, sent with cache-bypass headers so an edited
//! `products.json` is always picked up. There is no retry: the caller hands
//! the result to `CatalogState::finish_load`, which turns any failure into
//! an empty grid.

use std::path::PathBuf;
use std::time::Duration;

use catalog::{CatalogError, Product};
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};

/// Where the catalog JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(reqwest::Url),
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog request failed: {status}")]
    Status { status: u16 },

    #[error("catalog read failed for {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Parse(#[from] CatalogError),
}

/// Fetch and parse the catalog from `source`.
///
/// # Errors
///
/// Returns [`LoadError`] when the source cannot be read, answers with a
/// non-success status, or does not contain a product array.
pub async fn load_catalog(source: &CatalogSource, timeouts: FetchTimeouts) -> Result<Vec<Product>, LoadError> {
    tracing::info!(%source, "loading catalog");
    let body = match source {
        CatalogSource::Url(url) => fetch_body(url.clone(), timeouts).await?,
        CatalogSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io { path: path.clone(), source })?,
    };
    let products = catalog::parse_catalog(&body)?;
    tracing::info!(count = products.len(), "catalog loaded");
    Ok(products)
}

async fn fetch_body(url: reqwest::Url, timeouts: FetchTimeouts) -> Result<String, LoadError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .default_headers(no_cache_headers())
        .build()
        .map_err(|e| LoadError::HttpClientBuild(e.to_string()))?;

    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status { status: status.as_u16() });
    }
    Ok(response.text().await?)
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
