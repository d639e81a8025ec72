use std::sync::Arc;

use storefront_store::DocumentStore;
use storefront_types::{Customer, Document, DocumentId, Vendor};

use crate::error::{ServiceError, ServiceResult};

/// Lookup, create, replace, merge-patch and delete for one collection.
///
/// The service holds no state besides its store handle. It never retries and
/// never locks: concurrency control, if any, belongs to the store.
pub struct ResourceService<D: Document> {
    store: Arc<dyn DocumentStore<D>>,
}

impl<D: Document> Clone for ResourceService<D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<D: Document> ResourceService<D> {
    pub fn new(store: Arc<dyn DocumentStore<D>>) -> Self {
        Self { store }
    }

    /// The document with `id`, or [`ServiceError::NotFound`].
    pub async fn get_by_id(&self, id: &DocumentId) -> ServiceResult<D> {
        tracing::debug!(collection = D::COLLECTION, %id, "get by id");
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found_id::<D>(id))
    }

    /// Every document in store order.
    pub async fn list_all(&self) -> ServiceResult<Vec<D>> {
        tracing::debug!(collection = D::COLLECTION, "list all");
        Ok(self.store.find_all().await?)
    }

    /// Persist a new document under a store-assigned id.
    ///
    /// Any id on `record` is discarded. Field values are not validated and
    /// duplicates are accepted.
    pub async fn create(&self, mut record: D) -> ServiceResult<D> {
        record.set_id(None);
        let saved = self.store.save(record).await?;
        tracing::debug!(collection = D::COLLECTION, id = ?saved.id(), "created");
        Ok(saved)
    }

    /// Replace the document stored under `record`'s id.
    ///
    /// Existence is not checked: an unknown id is inserted (upsert).
    pub async fn update(&self, record: D) -> ServiceResult<D> {
        let Some(id) = record.id().copied() else {
            return Err(ServiceError::UpdateFailed(format!(
                "{} update requires an id",
                D::KIND
            )));
        };
        tracing::debug!(collection = D::COLLECTION, %id, "update");
        Ok(self.store.save(record).await?)
    }

    /// Merge the fields set in `patch` into the stored document.
    ///
    /// Fails with [`ServiceError::NotFound`] without writing anything if no
    /// document has `patch`'s id.
    pub async fn patch(&self, patch: D) -> ServiceResult<D> {
        let Some(id) = patch.id().copied() else {
            return Err(ServiceError::UpdateFailed(format!(
                "{} patch requires an id",
                D::KIND
            )));
        };
        let mut existing = self.get_by_id(&id).await?;
        existing.merge_patch(patch);
        tracing::debug!(collection = D::COLLECTION, %id, "patch");
        Ok(self.store.save(existing).await?)
    }

    /// Delete by id. Deleting an absent document succeeds.
    pub async fn delete(&self, id: &DocumentId) -> ServiceResult<()> {
        let existed = self.store.delete_by_id(id).await?;
        tracing::debug!(collection = D::COLLECTION, %id, existed, "delete");
        Ok(())
    }

    pub async fn count(&self) -> ServiceResult<u64> {
        Ok(self.store.count().await?)
    }
}

pub type CustomerService = ResourceService<Customer>;
pub type VendorService = ResourceService<Vendor>;
