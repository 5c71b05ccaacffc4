//! Browser `localStorage` binding for the session stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three role stores share one instance. Outside the browser (SSR,
//! tests) and when `localStorage` is unavailable, values live in memory
//! for the lifetime of the process.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::rc::Rc;

use session::{KeyValueStore, MemoryStore};

#[derive(Debug, Default)]
pub struct BrowserStorage {
    fallback: MemoryStore,
}

impl BrowserStorage {
    pub fn shared() -> Rc<dyn KeyValueStore> {
        Rc::new(Self::default())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                return storage.get_item(key).ok().flatten();
            }
        }
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected write to {key}");
                }
                return;
            }
        }
        self.fallback.set(key, value);
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage rejected removal of {key}");
                }
                return;
            }
        }
        self.fallback.remove(key);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
