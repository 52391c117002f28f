//! `localStorage`-backed key-value store.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (SSR, native tests) there is no storage: reads see
//! nothing and writes are dropped, which the wishlist treats as an empty set.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use catalog::{KeyValueStore, StoreError};

#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    /// Bind to `window.localStorage`, if the browser exposes it.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                tracing::warn!("localStorage unavailable; wishlist will not persist");
            }
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Result<&web_sys::Storage, String> {
        self.storage.as_ref().ok_or_else(|| "localStorage unavailable".to_owned())
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage().map_err(StoreError::Read)?;
            storage.get_item(key).map_err(|e| StoreError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage().map_err(StoreError::Write)?;
            storage.set_item(key, value).map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage().map_err(StoreError::Write)?;
            storage.remove_item(key).map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
