//! JSON-ready snapshot of the storefront for the page script.
//!
//! DESIGN
//! ======
//! The page script renders from one snapshot per change instead of calling
//! back into Rust per field. Field names match the catalog wire format.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use catalog::{KeyValueStore, SortMode, Storefront};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub liked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSnapshot {
    pub loading: bool,
    pub items: Vec<ItemSnapshot>,
    /// "Showing a–b of n results".
    pub summary: String,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub sort: SortMode,
    pub wishlist_only: bool,
    /// Notice body while the "added to wishlist" notice is open.
    pub notice: Option<String>,
}

impl ShopSnapshot {
    #[must_use]
    pub fn capture<S: KeyValueStore>(storefront: &Storefront<S>) -> Self {
        let view = storefront.view();
        let state = storefront.view_state();
        let items = view
            .items
            .iter()
            .map(|p| ItemSnapshot {
                id: p.id.clone(),
                name: p.name.clone(),
                price_text: p.price_text.clone(),
                image: p.image.clone(),
                liked: storefront.is_liked(&p.id),
            })
            .collect();
        Self {
            loading: storefront.is_loading(),
            items,
            summary: view.summary.to_string(),
            page: view.page,
            total_pages: view.total_pages,
            has_previous: view.has_previous,
            has_next: view.has_next,
            sort: state.sort,
            wishlist_only: state.wishlist_only,
            notice: storefront.notice().message(),
        }
    }

    /// Encode for handing to JavaScript.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which only occurs on non-string map keys.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
