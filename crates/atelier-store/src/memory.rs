use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::ids::validate_id;
use crate::traits::DocumentStore;

/// In-memory document store for tests and embedding.
///
/// Backed by a `BTreeMap`, so enumeration order is id order (the filesystem
/// backend makes no such promise). The read-only switch exists so tests can
/// exercise the `Unavailable` path without touching filesystem permissions.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    docs: RwLock<BTreeMap<String, String>>,
    read_only: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the store into (or out of) read-only mode.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Serialization("document map lock poisoned".to_string())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn read(&self, id: &str) -> StoreResult<Option<String>> {
        validate_id(id)?;
        let docs = self.docs.read().map_err(|_| Self::lock_poisoned())?;
        Ok(docs.get(id).cloned())
    }

    fn write(&self, id: &str, json: &str) -> StoreResult<()> {
        validate_id(id)?;
        self.check_writable()?;
        let mut docs = self.docs.write().map_err(|_| Self::lock_poisoned())?;
        docs.insert(id.to_string(), json.to_string());
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<(String, String)>> {
        let docs = self.docs.read().map_err(|_| Self::lock_poisoned())?;
        Ok(docs
            .iter()
            .map(|(id, json)| (id.clone(), json.clone()))
            .collect())
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        validate_id(id)?;
        self.check_writable()?;
        let mut docs = self.docs.write().map_err(|_| Self::lock_poisoned())?;
        Ok(docs.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_a_document_store() {
        let store = InMemoryDocumentStore::new();
        store.write("b", "{}").unwrap();
        store.write("a", "{}").unwrap();

        assert_eq!(store.read("a").unwrap().as_deref(), Some("{}"));
        let ids: Vec<_> = store.list().unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
    }

    #[test]
    fn read_only_mode_refuses_writes() {
        let store = InMemoryDocumentStore::new();
        store.write("doc", "{}").unwrap();
        store.set_read_only(true);

        assert!(matches!(store.write("doc", "{}"), Err(StoreError::Unavailable)));
        assert!(matches!(store.remove("doc"), Err(StoreError::Unavailable)));
        assert!(store.read("doc").unwrap().is_some());
    }
}
