//! # web
//!
//! Browser bindings for the storefront catalog view model.
//!
//! Provides the `localStorage` wishlist store, the cache-bypassing catalog
//! fetch, and (with `hydrate`) the `wasm-bindgen` session the page script
//! drives. Without `hydrate` the browser calls compile to inert stubs.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod session;
pub mod shop;
pub mod snapshot;
pub mod storage;

pub use shop::Shop;
pub use snapshot::{ItemSnapshot, ShopSnapshot};
pub use storage::LocalStorageStore;

/// Module entry point: install the panic hook and console logger.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
