//! Catalog fetch for the browser build.
//!
//! Client-side (hydrate): one `gloo-net` GET with the HTTP cache bypassed.
//! Other builds return an error so the session shows an empty grid.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::Product;

/// Relative path of the static catalog file.
pub const CATALOG_PATH: &str = "/data/products.json";

#[cfg(any(test, feature = "hydrate"))]
fn catalog_request_failed_message(status: u16) -> String {
    format!("catalog request failed: {status}")
}

/// Fetch and parse the catalog from [`CATALOG_PATH`].
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a product array.
pub async fn fetch_catalog() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CATALOG_PATH)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(catalog_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        catalog::parse_catalog(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
