use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use storefront_types::{Category, Document, DocumentId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{CategoryStore, DocumentStore};

struct Collection<D> {
    documents: HashMap<DocumentId, D>,
    // Insertion order of live ids; `find_all` follows it.
    order: Vec<DocumentId>,
}

impl<D> Collection<D> {
    fn new() -> Self {
        Self {
            documents: HashMap::new(),
            order: Vec::new(),
        }
    }
}

/// In-memory, HashMap-based document store.
///
/// Intended for tests, demos and single-process deployments. Each collection
/// lives behind a `RwLock`; the lock is never held across an `.await`.
/// Documents are listed in insertion order, and replacing a document keeps
/// its position.
pub struct InMemoryDocumentStore<D> {
    inner: RwLock<Collection<D>>,
}

impl<D: Document> InMemoryDocumentStore<D> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection::new()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collection<D>>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Unavailable(format!("{} lock poisoned: {e}", D::COLLECTION)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collection<D>>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Unavailable(format!("{} lock poisoned: {e}", D::COLLECTION)))
    }
}

impl<D: Document> Default for InMemoryDocumentStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for InMemoryDocumentStore<D> {
    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<D>> {
        Ok(self.read()?.documents.get(id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<D>> {
        let collection = self.read()?;
        Ok(collection
            .order
            .iter()
            .filter_map(|id| collection.documents.get(id).cloned())
            .collect())
    }

    async fn save(&self, mut document: D) -> StoreResult<D> {
        let id = match document.id() {
            Some(id) => *id,
            None => {
                let id = DocumentId::generate();
                document.set_id(Some(id));
                id
            }
        };

        let mut collection = self.write()?;
        if collection.documents.insert(id, document.clone()).is_none() {
            collection.order.push(id);
            tracing::trace!(collection = D::COLLECTION, %id, "inserted document");
        } else {
            tracing::trace!(collection = D::COLLECTION, %id, "replaced document");
        }
        Ok(document)
    }

    async fn delete_by_id(&self, id: &DocumentId) -> StoreResult<bool> {
        let mut collection = self.write()?;
        if collection.documents.remove(id).is_none() {
            return Ok(false);
        }
        collection.order.retain(|existing| existing != id);
        Ok(true)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.read()?.order.len() as u64)
    }
}

#[async_trait]
impl CategoryStore for InMemoryDocumentStore<Category> {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let collection = self.read()?;
        Ok(collection
            .order
            .iter()
            .filter_map(|id| collection.documents.get(id))
            .find(|category| category.name.as_deref() == Some(name))
            .cloned())
    }
}

impl<D: Document> std::fmt::Debug for InMemoryDocumentStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.read().ok().map(|c| c.order.len());
        f.debug_struct("InMemoryDocumentStore")
            .field("collection", &D::COLLECTION)
            .field("document_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_types::{Customer, Vendor};

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn save_assigns_id() {
        let store = InMemoryDocumentStore::<Customer>::new();
        let saved = store.save(Customer::new("Rishu", "Singh")).await.unwrap();
        let id = saved.id.expect("id assigned");

        let read_back = store.find_by_id(&id).await.unwrap().expect("should exist");
        assert_eq!(read_back, saved);
    }

    #[tokio::test]
    async fn save_with_id_replaces() {
        let store = InMemoryDocumentStore::<Vendor>::new();
        let saved = store.save(Vendor::new("Old")).await.unwrap();
        let id = saved.id.unwrap();

        store.save(Vendor::new("New").with_id(id)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        let read_back = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(read_back.name.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts() {
        let store = InMemoryDocumentStore::<Vendor>::new();
        let id = DocumentId::generate();
        let saved = store.save(Vendor::new("Upserted").with_id(id)).await.unwrap();
        assert_eq!(saved.id, Some(id));
        assert!(store.find_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = InMemoryDocumentStore::<Customer>::new();
        let found = store.find_by_id(&DocumentId::generate()).await.unwrap();
        assert!(found.is_none());
    }

    // -----------------------------------------------------------------------
    // Ordering
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = InMemoryDocumentStore::<Category>::new();
        for name in ["Fruits", "Dried", "Fresh"] {
            store.save(Category::new(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, ["Fruits", "Dried", "Fresh"]);
    }

    #[tokio::test]
    async fn replace_keeps_position() {
        let store = InMemoryDocumentStore::<Category>::new();
        let first = store.save(Category::new("a")).await.unwrap();
        store.save(Category::new("b")).await.unwrap();
        store
            .save(Category::new("a2").with_id(first.id.unwrap()))
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all[0].name.as_deref(), Some("a2"));
        assert_eq!(all[1].name.as_deref(), Some("b"));
    }

    // -----------------------------------------------------------------------
    // Delete / Count
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn delete_present_document() {
        let store = InMemoryDocumentStore::<Customer>::new();
        let id = store.save(Customer::new("a", "b")).await.unwrap().id.unwrap();
        assert!(store.delete_by_id(&id).await.unwrap());
        assert!(store.find_by_id(&id).await.unwrap().is_none());
        assert!(!store.delete_by_id(&id).await.unwrap());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_document() {
        let store = InMemoryDocumentStore::<Customer>::new();
        assert!(!store.delete_by_id(&DocumentId::generate()).await.unwrap());
    }

    #[tokio::test]
    async fn count_tracks_contents() {
        let store = InMemoryDocumentStore::<Vendor>::new();
        assert_eq!(store.count().await.unwrap(), 0);
        let id = store.save(Vendor::new("a")).await.unwrap().id.unwrap();
        store.save(Vendor::new("b")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
        store.delete_by_id(&id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    // -----------------------------------------------------------------------
    // Name lookup
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn find_by_name_is_exact() {
        let store = InMemoryDocumentStore::<Category>::new();
        store.save(Category::new("Fruits")).await.unwrap();

        assert!(store.find_by_name("Fruits").await.unwrap().is_some());
        assert!(store.find_by_name("fruits").await.unwrap().is_none());
        assert!(store.find_by_name("Fruit").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_name_returns_first_duplicate() {
        let store = InMemoryDocumentStore::<Category>::new();
        let first = store.save(Category::new("Nuts")).await.unwrap();
        store.save(Category::new("Nuts")).await.unwrap();

        let found = store.find_by_name("Nuts").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn concurrent_saves_are_all_kept() {
        let store = Arc::new(InMemoryDocumentStore::<Customer>::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.save(Customer::new(format!("c{i}"), "x")).await.unwrap()
                })
            })
            .collect();

        for h in handles {
            h.await.expect("task should not panic");
        }
        assert_eq!(store.count().await.unwrap(), 8);
    }

    #[test]
    fn debug_format() {
        let store = InMemoryDocumentStore::<Vendor>::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryDocumentStore"));
        assert!(debug.contains("vendors"));
        assert!(debug.contains("Some(0)"));
    }

    #[test]
    fn poisoned_lock_is_unavailable() {
        let store = Arc::new(InMemoryDocumentStore::<Vendor>::new());
        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let err = rt.block_on(store.count()).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(format!("{store:?}").contains("None"));
    }
}
