use std::io::Write as _;

use axum::Router;
use axum::http::{HeaderMap as RequestHeaders, StatusCode};
use axum::routing::get;

use super::*;

const TIMEOUTS: FetchTimeouts = FetchTimeouts { request_secs: 5, connect_secs: 5 };

const CATALOG_JSON: &str = r#"[
    {"id": "1", "name": "Bag", "priceText": "$40.00"},
    {"id": "2", "name": "Case"}
]"#;

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn url(base: &str, path: &str) -> CatalogSource {
    CatalogSource::Url(reqwest::Url::parse(&format!("{base}{path}")).unwrap())
}

// =============================================================
// File sources
// =============================================================

#[tokio::test]
async fn file_source_parses_products() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let products = load_catalog(&CatalogSource::File(file.path().to_path_buf()), TIMEOUTS).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price_text.as_deref(), Some("$40.00"));
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");

    let err = load_catalog(&CatalogSource::File(path.clone()), TIMEOUTS).await.unwrap_err();

    assert!(matches!(err, LoadError::Io { path: p, .. } if p == path));
}

#[tokio::test]
async fn malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<html>not json</html>").unwrap();

    let err = load_catalog(&CatalogSource::File(file.path().to_path_buf()), TIMEOUTS).await.unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

// =============================================================
// HTTP sources
// =============================================================

#[tokio::test]
async fn http_source_parses_products() {
    let base = serve(Router::new().route("/data/products.json", get(|| async { CATALOG_JSON }))).await;

    let products = load_catalog(&url(&base, "/data/products.json"), TIMEOUTS).await.unwrap();

    assert_eq!(products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Bag", "Case"]);
}

#[tokio::test]
async fn http_request_bypasses_cache() {
    let handler = |headers: RequestHeaders| async move {
        let cache_control = headers.get("cache-control").and_then(|v| v.to_str().ok()).unwrap_or_default();
        let pragma = headers.get("pragma").and_then(|v| v.to_str().ok()).unwrap_or_default();
        if cache_control == "no-store" && pragma == "no-cache" {
            (StatusCode::OK, CATALOG_JSON)
        } else {
            (StatusCode::PRECONDITION_FAILED, "")
        }
    };
    let base = serve(Router::new().route("/data/products.json", get(handler))).await;

    let products = load_catalog(&url(&base, "/data/products.json"), TIMEOUTS).await.unwrap();

    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let base = serve(Router::new()).await;

    let err = load_catalog(&url(&base, "/data/products.json"), TIMEOUTS).await.unwrap_err();

    assert!(matches!(err, LoadError::Status { status: 404 }));
    assert_eq!(err.to_string(), "catalog request failed: 404");
}

#[tokio::test]
async fn http_body_that_is_not_a_catalog_is_parse_error() {
    let base = serve(Router::new().route("/data/products.json", get(|| async { r#"{"products": []}"# }))).await;

    let err = load_catalog(&url(&base, "/data/products.json"), TIMEOUTS).await.unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = load_catalog(&url(&format!("http://{addr}"), "/data/products.json"), TIMEOUTS).await.unwrap_err();

    assert!(matches!(err, LoadError::Request(_)));
}

#[test]
fn source_display_shows_location() {
    assert_eq!(CatalogSource::File(PathBuf::from("data/products.json")).to_string(), "data/products.json");
    assert_eq!(url("http://127.0.0.1:8080", "/data/products.json").to_string(), "http://127.0.0.1:8080/data/products.json");
}
