//! Catalog view model for the storefront product grid.
//!
//! This crate is UI-framework agnostic so the browser client and the native
//! CLI can both drive it. It owns the product data model, the persisted
//! wishlist, the pure sort/filter/paginate derivation, and the one-shot
//! "added to wishlist" notice.
//!
//! DESIGN
//! ======
//! All mutation goes through [`Storefront::dispatch`]. Rendering reads a
//! [`DerivedView`] recomputed from current state, never a cached copy.

pub mod notice;
pub mod product;
pub mod store;
pub mod storefront;
pub mod view;
pub mod wishlist;

pub use notice::WishlistNotice;
pub use product::{CatalogError, CatalogState, Product, parse_catalog};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use storefront::{Action, Storefront};
pub use view::{
    DerivedView, PAGE_SIZE, ResultSummary, SortMode, ViewState, derive_view, derive_view_with_page_size,
    locale_cmp, total_pages,
};
pub use wishlist::{ToggleOutcome, WISHLIST_KEY, Wishlist, WishlistSet};
