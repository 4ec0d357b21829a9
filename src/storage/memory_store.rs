//! In-memory [`KeyValueStore`].
//!
//! Clones share the same backing map, so two stores built from clones of one
//! `MemoryStore` observe each other's writes. An optional byte quota mimics the
//! size limit of browser local storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::KeyValueStore;
use crate::types::errors::StorageError;

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl Inner {
    /// Total stored size in bytes, counting keys and values.
    fn used_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

/// Shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().quota = Some(bytes);
        store
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(quota) = inner.quota {
            let previous = inner.items.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let needed = inner.used_bytes() - previous + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().items.remove(key);
        Ok(())
    }
}
