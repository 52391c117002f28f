use super::*;
use crate::store::MemoryStore;

fn product(id: &str, name: &str) -> Product {
    Product { id: id.to_owned(), name: name.to_owned(), price_text: None, image: None }
}

fn stored_ids(store: &MemoryStore) -> Vec<String> {
    let raw = store.get(WISHLIST_KEY).unwrap().expect("wishlist persisted");
    serde_json::from_str(&raw).unwrap()
}

/// Store whose reads and writes always fail.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Read("storage disabled".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write("quota exceeded".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Write("quota exceeded".into()))
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_missing_key_is_empty() {
    let wishlist = Wishlist::load(&MemoryStore::new());
    assert!(wishlist.is_empty());
}

#[test]
fn load_reads_json_array() {
    let store = MemoryStore::with_entry(WISHLIST_KEY, r#"["2","7"]"#);
    let wishlist = Wishlist::load(&store);
    assert_eq!(wishlist.len(), 2);
    assert!(wishlist.contains("2"));
    assert!(wishlist.contains("7"));
}

#[test]
fn load_corrupt_value_is_empty() {
    for raw in ["not json", "{\"1\":true}", "[1,2]", ""] {
        let store = MemoryStore::with_entry(WISHLIST_KEY, raw);
        assert!(Wishlist::load(&store).is_empty(), "raw value {raw:?}");
    }
}

#[test]
fn load_unreadable_store_is_empty() {
    assert!(Wishlist::load(&BrokenStore).is_empty());
}

#[test]
fn load_keeps_stale_ids() {
    let store = MemoryStore::with_entry(WISHLIST_KEY, r#"["gone"]"#);
    assert!(Wishlist::load(&store).contains("gone"));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_add_reports_matching_product() {
    let catalog = vec![product("1", "Bag"), product("2", "Case")];
    let mut store = MemoryStore::new();
    let mut wishlist = Wishlist::default();

    let outcome = wishlist.toggle("1", &catalog, &mut store);

    assert_eq!(outcome, ToggleOutcome::Added { product: Some(product("1", "Bag")) });
    assert_eq!(wishlist.ids().iter().collect::<Vec<_>>(), vec!["1"]);
    assert_eq!(stored_ids(&store), vec!["1"]);
}

#[test]
fn toggle_add_unknown_id_carries_no_product() {
    let mut store = MemoryStore::new();
    let mut wishlist = Wishlist::default();

    let outcome = wishlist.toggle("ghost", &[], &mut store);

    assert_eq!(outcome, ToggleOutcome::Added { product: None });
    assert!(wishlist.contains("ghost"));
}

#[test]
fn toggle_remove_persists_smaller_set() {
    let catalog = vec![product("1", "Bag")];
    let mut store = MemoryStore::with_entry(WISHLIST_KEY, r#"["1","2"]"#);
    let mut wishlist = Wishlist::load(&store);

    let outcome = wishlist.toggle("1", &catalog, &mut store);

    assert_eq!(outcome, ToggleOutcome::Removed);
    assert_eq!(stored_ids(&store), vec!["2"]);
}

#[test]
fn toggle_twice_restores_prior_set_and_storage() {
    let catalog = vec![product("1", "Bag"), product("3", "Hat")];
    let mut store = MemoryStore::with_entry(WISHLIST_KEY, r#"["3"]"#);
    let mut wishlist = Wishlist::load(&store);
    let before = wishlist.clone();

    wishlist.toggle("1", &catalog, &mut store);
    wishlist.toggle("1", &catalog, &mut store);

    assert_eq!(wishlist, before);
    assert_eq!(stored_ids(&store), vec!["3"]);
}

#[test]
fn toggle_overwrites_corrupt_stored_value() {
    let mut store = MemoryStore::with_entry(WISHLIST_KEY, "garbage");
    let mut wishlist = Wishlist::load(&store);

    wishlist.toggle("4", &[], &mut store);

    assert_eq!(stored_ids(&store), vec!["4"]);
}

#[test]
fn load_after_toggle_round_trips() {
    let mut store = MemoryStore::new();
    let mut wishlist = Wishlist::default();
    wishlist.toggle("b", &[], &mut store);
    wishlist.toggle("a", &[], &mut store);

    assert_eq!(Wishlist::load(&store), wishlist);
}

#[test]
fn toggle_with_failing_store_still_mutates_memory() {
    let mut wishlist = Wishlist::default();
    let outcome = wishlist.toggle("1", &[product("1", "Bag")], &mut BrokenStore);
    assert!(matches!(outcome, ToggleOutcome::Added { product: Some(_) }));
    assert!(wishlist.contains("1"));
}

#[test]
fn from_iterator_collects_ids() {
    let wishlist: Wishlist = ["x".to_owned(), "y".to_owned(), "x".to_owned()].into_iter().collect();
    assert_eq!(wishlist.len(), 2);
}

#[test]
fn toggle_persists_ids_in_like_order() {
    let mut store = MemoryStore::with_entry(WISHLIST_KEY, r#"["9","2"]"#);
    let mut wishlist = Wishlist::load(&store);

    wishlist.toggle("5", &[], &mut store);
    wishlist.toggle("1", &[], &mut store);
    wishlist.toggle("2", &[], &mut store);

    assert_eq!(stored_ids(&store), vec!["9", "5", "1"]);
    assert_eq!(wishlist.ids().iter().collect::<Vec<_>>(), vec!["9", "5", "1"]);
}
