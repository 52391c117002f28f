//! Shared storefront handle behind the page session.
//!
//! DESIGN
//! ======
//! The session is created synchronously so the page script can render the
//! loading state at once. The catalog fetch runs afterwards on a clone of
//! the same handle and applies its result when it settles. Borrows never
//! span an await.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use catalog::{Action, KeyValueStore, Product, Storefront};

use crate::api;
use crate::snapshot::ShopSnapshot;

pub struct Shop<S> {
    storefront: Rc<RefCell<Storefront<S>>>,
}

impl<S> Clone for Shop<S> {
    fn clone(&self) -> Self {
        Self { storefront: Rc::clone(&self.storefront) }
    }
}

impl<S: KeyValueStore> Shop<S> {
    /// Read the wishlist from `store`. The catalog is still loading.
    pub fn open(store: S) -> Self {
        Self { storefront: Rc::new(RefCell::new(Storefront::new(store))) }
    }

    /// Current snapshot as JSON. See [`ShopSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> String {
        ShopSnapshot::capture(&self.storefront.borrow()).to_json().unwrap_or_else(|e| {
            tracing::error!(error = %e, "snapshot encode failed");
            "{}".to_owned()
        })
    }

    pub fn dispatch(&self, action: Action) -> String {
        self.storefront.borrow_mut().dispatch(action);
        self.snapshot()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.storefront.borrow().is_loading()
    }

    /// Apply a settled catalog fetch and return the new snapshot.
    pub fn finish_load<E: Display>(&self, result: Result<Vec<Product>, E>) -> String {
        self.storefront.borrow_mut().finish_load(result);
        self.snapshot()
    }

    /// Await `fetch`, apply it, and resolve to the loaded snapshot.
    pub async fn load_with<F, E>(self, fetch: F) -> String
    where
        F: Future<Output = Result<Vec<Product>, E>>,
        E: Display,
    {
        let result = fetch.await;
        self.finish_load(result)
    }

    /// Fetch [`api::CATALOG_PATH`] once and apply it.
    pub async fn load(self) -> String {
        self.load_with(api::fetch_catalog()).await
    }
}
