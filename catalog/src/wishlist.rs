//! Wishlist membership and its persistence.
//!
//! DESIGN
//! ======
//! Every toggle rewrites the whole set under [`WISHLIST_KEY`]. Only the add
//! path reports the matching product back to the caller; removal never opens
//! the notice.
//!
//! ERROR HANDLING
//! ==============
//! Loading never fails: a missing, unreadable, or corrupt value becomes an
//! empty set. Write failures are logged and dropped, so in-memory state can
//! run ahead of storage until the next successful toggle.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use indexmap::IndexSet;

use crate::product::Product;
use crate::store::{KeyValueStore, StoreError};

/// Storage key for the persisted id list.
pub const WISHLIST_KEY: &str = "likes";

/// Liked product ids in the order they were liked. May hold ids absent from
/// the current catalog.
pub type WishlistSet = IndexSet<String>;

/// Result of [`Wishlist::toggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The id was added. Carries the catalog product when one matches.
    Added { product: Option<Product> },
    /// The id was removed.
    Removed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: WishlistSet,
}

impl Wishlist {
    /// Read the persisted set, falling back to empty.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let raw = match store.get(WISHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "wishlist read failed; starting empty");
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Self { ids: ids.into_iter().collect() },
            Err(e) => {
                tracing::warn!(error = %e, "stored wishlist is corrupt; starting empty");
                Self::default()
            }
        }
    }

    /// Flip membership of `id` and persist the result.
    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, id: &str, catalog: &[Product], store: &mut S) -> ToggleOutcome {
        let outcome = if self.ids.shift_remove(id) {
            ToggleOutcome::Removed
        } else {
            self.ids.insert(id.to_owned());
            let product = catalog.iter().find(|p| p.id == id).cloned();
            ToggleOutcome::Added { product }
        };
        if let Err(e) = self.persist(store) {
            tracing::warn!(error = %e, %id, "wishlist write failed");
        }
        outcome
    }

    fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.ids)?;
        store.set(WISHLIST_KEY, &raw)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn ids(&self) -> &WishlistSet {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for Wishlist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
