use super::*;

#[test]
fn parse_catalog_reads_wire_field_names() {
    let raw = r#"[
        {"id": "1", "name": "Bag", "priceText": "$40.00", "image": "/img/bag.png"},
        {"id": "2", "name": "Case"}
    ]"#;
    let products = parse_catalog(raw).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price_text.as_deref(), Some("$40.00"));
    assert_eq!(products[0].image.as_deref(), Some("/img/bag.png"));
    assert_eq!(products[1].price_text, None);
    assert_eq!(products[1].image, None);
}

#[test]
fn parse_catalog_ignores_unknown_fields() {
    let products = parse_catalog(r#"[{"id": "1", "name": "Bag", "color": "red"}]"#).unwrap();
    assert_eq!(products[0].name, "Bag");
}

#[test]
fn parse_catalog_rejects_missing_name() {
    assert!(parse_catalog(r#"[{"id": "1"}]"#).is_err());
}

#[test]
fn parse_catalog_rejects_non_array() {
    let err = parse_catalog(r#"{"id": "1", "name": "Bag"}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid catalog JSON"));
}

#[test]
fn product_serializes_price_as_camel_case_and_skips_absent_fields() {
    let product = Product { id: "1".into(), name: "Bag".into(), price_text: Some("$1".into()), image: None };
    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json, serde_json::json!({"id": "1", "name": "Bag", "priceText": "$1"}));
}

#[test]
fn catalog_state_starts_loading_and_empty() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert!(state.products.is_empty());
}

#[test]
fn finish_load_success_sets_products_and_clears_loading() {
    let mut state = CatalogState::default();
    let products = parse_catalog(r#"[{"id": "1", "name": "Bag"}]"#).unwrap();
    state.finish_load::<CatalogError>(Ok(products));
    assert!(!state.loading);
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.find("1").map(|p| p.name.as_str()), Some("Bag"));
}

#[test]
fn finish_load_failure_clears_loading_and_stays_empty() {
    let mut state = CatalogState::default();
    state.finish_load(Err("connection refused"));
    assert!(!state.loading);
    assert!(state.products.is_empty());
}

#[test]
fn find_returns_none_for_unknown_id() {
    let state = CatalogState::loaded(Vec::new());
    assert!(state.find("missing").is_none());
}
