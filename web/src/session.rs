//! `wasm-bindgen` surface for the shop page script.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page script owns the DOM. It constructs one [`ShopSession`], renders
//! the loading snapshot, then awaits `load()` and renders again. Each click
//! or select change goes to the matching method, which returns the next
//! snapshot JSON.

use wasm_bindgen::prelude::*;

use catalog::{Action, SortMode};

use crate::shop::Shop;
use crate::storage::LocalStorageStore;

#[wasm_bindgen]
pub struct ShopSession {
    shop: Shop<LocalStorageStore>,
}

#[wasm_bindgen]
impl ShopSession {
    /// Read the wishlist. The catalog stays loading until [`Self::load`].
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { shop: Shop::open(LocalStorageStore::new()) }
    }

    /// Fetch the catalog once. Resolves to the loaded snapshot JSON.
    pub fn load(&self) -> js_sys::Promise {
        let shop = self.shop.clone();
        wasm_bindgen_futures::future_to_promise(async move { Ok(JsValue::from_str(&shop.load().await)) })
    }

    /// Current snapshot as JSON. See [`crate::ShopSnapshot`].
    pub fn snapshot(&self) -> String {
        self.shop.snapshot()
    }

    #[wasm_bindgen(getter)]
    pub fn loading(&self) -> bool {
        self.shop.is_loading()
    }

    #[wasm_bindgen(js_name = toggleLike)]
    pub fn toggle_like(&self, id: String) -> String {
        self.shop.dispatch(Action::ToggleLike(id))
    }

    /// `value` is the selector value: `default`, `az` or `za`.
    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&self, value: &str) -> String {
        match value.parse::<SortMode>() {
            Ok(sort) => self.shop.dispatch(Action::SetSort(sort)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring sort change");
                self.shop.snapshot()
            }
        }
    }

    #[wasm_bindgen(js_name = previousPage)]
    pub fn previous_page(&self) -> String {
        self.shop.dispatch(Action::PreviousPage)
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&self) -> String {
        self.shop.dispatch(Action::NextPage)
    }

    #[wasm_bindgen(js_name = returnToShop)]
    pub fn return_to_shop(&self) -> String {
        self.shop.dispatch(Action::SetWishlistOnly(false))
    }

    #[wasm_bindgen(js_name = dismissNotice)]
    pub fn dismiss_notice(&self) -> String {
        self.shop.dispatch(Action::DismissNotice)
    }

    #[wasm_bindgen(js_name = viewWishlist)]
    pub fn view_wishlist(&self) -> String {
        self.shop.dispatch(Action::ViewWishlist)
    }
}
