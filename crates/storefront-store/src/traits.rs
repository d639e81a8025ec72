use async_trait::async_trait;
use storefront_types::{Category, Document, DocumentId};

use crate::error::StoreResult;

/// Asynchronous storage for one collection of documents.
///
/// All implementations must satisfy these invariants:
/// - An absent document is reported as `Ok(None)`, never as an error.
/// - `save` is an upsert: it replaces the document stored under the same id,
///   or inserts it if none exists. A document without an id gets a freshly
///   generated one.
/// - Deleting an absent document is not an error.
/// - Backend failures are propagated, never silently ignored.
#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    /// Read a document by id.
    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<D>>;

    /// Read every document in the collection, in store order.
    ///
    /// The result is materialized: each call returns a fresh snapshot that
    /// can be iterated any number of times.
    async fn find_all(&self) -> StoreResult<Vec<D>>;

    /// Insert or replace a document and return it as persisted.
    async fn save(&self, document: D) -> StoreResult<D>;

    /// Delete a document by id. Returns `true` if the document existed.
    async fn delete_by_id(&self, id: &DocumentId) -> StoreResult<bool>;

    /// Number of documents in the collection.
    async fn count(&self) -> StoreResult<u64>;
}

/// Category storage with a secondary lookup by name.
#[async_trait]
pub trait CategoryStore: DocumentStore<Category> {
    /// Find the category whose name equals `name` exactly (case-sensitive).
    ///
    /// If several categories share the name, the first in store order wins.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>>;
}
