//! Storefront view model: state container and command dispatch.
//!
//! DESIGN
//! ======
//! Each user gesture maps to one [`Action`]. `dispatch` applies it
//! synchronously; the only side effect is the wishlist write inside
//! `ToggleLike`. Callers re-read [`Storefront::view`] afterwards.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use crate::notice::WishlistNotice;
use crate::product::{CatalogState, Product};
use crate::store::KeyValueStore;
use crate::view::{self, DerivedView, SortMode, ViewState};
use crate::wishlist::{ToggleOutcome, Wishlist};

/// User commands accepted by [`Storefront::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleLike(String),
    SetSort(SortMode),
    SetPage(usize),
    PreviousPage,
    NextPage,
    /// `false` is the "Return to shop" button.
    SetWishlistOnly(bool),
    DismissNotice,
    /// Notice button: show only liked products from page 1 and close.
    ViewWishlist,
}

#[derive(Debug)]
pub struct Storefront<S> {
    catalog: CatalogState,
    view: ViewState,
    wishlist: Wishlist,
    notice: WishlistNotice,
    store: S,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Start a session: catalog still loading, wishlist read from `store`.
    pub fn new(store: S) -> Self {
        let wishlist = Wishlist::load(&store);
        tracing::debug!(liked = wishlist.len(), "storefront session started");
        Self {
            catalog: CatalogState::default(),
            view: ViewState::default(),
            wishlist,
            notice: WishlistNotice::default(),
            store,
        }
    }

    /// Apply the startup fetch result. See [`CatalogState::finish_load`].
    pub fn finish_load<E: std::fmt::Display>(&mut self, result: Result<Vec<Product>, E>) {
        self.catalog.finish_load(result);
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ToggleLike(id) => self.toggle_like(&id),
            Action::SetSort(sort) => self.view = self.view.with_sort(sort),
            Action::SetPage(page) => self.view = self.view.with_page(page),
            Action::PreviousPage => self.view = self.view.previous_page(),
            Action::NextPage => {
                let total_pages = self.view().total_pages;
                self.view = self.view.next_page(total_pages);
            }
            Action::SetWishlistOnly(on) => self.view = self.view.with_wishlist_only(on),
            Action::DismissNotice => self.notice.dismiss(),
            Action::ViewWishlist => {
                self.view = self.view.with_wishlist_only(true);
                self.notice.dismiss();
            }
        }
    }

    fn toggle_like(&mut self, id: &str) {
        match self.wishlist.toggle(id, &self.catalog.products, &mut self.store) {
            ToggleOutcome::Added { product: Some(product) } => self.notice.open(product),
            ToggleOutcome::Added { product: None } => {
                tracing::debug!(%id, "liked id not in catalog; no notice");
            }
            ToggleOutcome::Removed => {}
        }
    }

    /// Current visible page.
    #[must_use]
    pub fn view(&self) -> DerivedView<'_> {
        view::derive_view(&self.catalog.products, &self.view, &self.wishlist)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.catalog.loading
    }

    #[must_use]
    pub fn is_liked(&self, id: &str) -> bool {
        self.wishlist.contains(id)
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub fn notice(&self) -> &WishlistNotice {
        &self.notice
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand back the store, e.g. to flush it.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
