use std::sync::Arc;

use storefront_store::CategoryStore;
use storefront_types::{Category, DocumentId};

use crate::error::{ServiceError, ServiceResult};
use crate::resource::ResourceService;

/// How a single path segment addressing a category is interpreted.
///
/// A segment with document-id syntax (24 hex characters) is always an id
/// lookup, whether or not such a category exists. Anything else is a name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryLookup<'a> {
    Id(DocumentId),
    Name(&'a str),
}

impl<'a> CategoryLookup<'a> {
    pub fn parse(identifier: &'a str) -> Self {
        if DocumentId::is_valid(identifier) {
            if let Ok(id) = DocumentId::from_hex(identifier) {
                return Self::Id(id);
            }
        }
        Self::Name(identifier)
    }
}

/// Category operations: the shared resource contract plus name lookup.
#[derive(Clone)]
pub struct CategoryService {
    records: ResourceService<Category>,
    names: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new<S: CategoryStore + 'static>(store: Arc<S>) -> Self {
        let names: Arc<dyn CategoryStore> = store.clone();
        Self {
            records: ResourceService::new(store),
            names,
        }
    }

    /// The underlying resource service, for the operations categories share
    /// with every other collection.
    pub fn records(&self) -> &ResourceService<Category> {
        &self.records
    }

    /// The category named exactly `name`, or [`ServiceError::NotFound`].
    pub async fn get_by_name(&self, name: &str) -> ServiceResult<Category> {
        tracing::debug!(name, "get category by name");
        self.names
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found_name::<Category>(name))
    }

    /// Resolve a path segment that is either an id or a name.
    pub async fn get_by_identifier(&self, identifier: &str) -> ServiceResult<Category> {
        match CategoryLookup::parse(identifier) {
            CategoryLookup::Id(id) => self.get_by_id(&id).await,
            CategoryLookup::Name(name) => self.get_by_name(name).await,
        }
    }

    pub async fn get_by_id(&self, id: &DocumentId) -> ServiceResult<Category> {
        self.records.get_by_id(id).await
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Category>> {
        self.records.list_all().await
    }

    pub async fn create(&self, record: Category) -> ServiceResult<Category> {
        self.records.create(record).await
    }

    pub async fn update(&self, record: Category) -> ServiceResult<Category> {
        self.records.update(record).await
    }

    pub async fn patch(&self, patch: Category) -> ServiceResult<Category> {
        self.records.patch(patch).await
    }

    pub async fn delete(&self, id: &DocumentId) -> ServiceResult<()> {
        self.records.delete(id).await
    }

    pub async fn count(&self) -> ServiceResult<u64> {
        self.records.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_store::InMemoryDocumentStore;
    use storefront_types::Document;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(InMemoryDocumentStore::<Category>::new()))
    }

    #[test]
    fn hex_segment_is_id_lookup() {
        let lookup = CategoryLookup::parse("507f1f77bcf86cd799439011");
        assert!(matches!(lookup, CategoryLookup::Id(_)));

        let upper = CategoryLookup::parse("507F1F77BCF86CD799439011");
        assert!(matches!(upper, CategoryLookup::Id(_)));
    }

    #[test]
    fn other_segments_are_name_lookups() {
        for segment in ["Fruits", "507f1f77bcf86cd79943901", "507f1f77bcf86cd79943901z", ""] {
            assert_eq!(CategoryLookup::parse(segment), CategoryLookup::Name(segment));
        }
    }

    #[tokio::test]
    async fn get_by_name_exact_match() {
        let service = service();
        let created = service.create(Category::new("Exotic")).await.unwrap();

        assert_eq!(service.get_by_name("Exotic").await.unwrap(), created);
        let err = service.get_by_name("exotic").await.unwrap_err();
        assert_eq!(err.to_string(), "Category with name exotic not found");
    }

    #[tokio::test]
    async fn identifier_dispatches_by_syntax() {
        let service = service();
        let created = service.create(Category::new("Fresh")).await.unwrap();
        let id = created.id.unwrap();

        assert_eq!(service.get_by_identifier(&id.to_hex()).await.unwrap(), created);
        assert_eq!(service.get_by_identifier("Fresh").await.unwrap(), created);
    }

    #[tokio::test]
    async fn hex_identifier_never_falls_back_to_name() {
        let service = service();
        let hex_name = "aaaaaaaaaaaaaaaaaaaaaaaa";
        service.create(Category::new(hex_name)).await.unwrap();

        let err = service.get_by_identifier(hex_name).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Category with id {hex_name} not found")
        );
    }

    #[tokio::test]
    async fn patch_category_name() {
        let service = service();
        let id = service.create(Category::new("Dried")).await.unwrap().id.unwrap();
        let patched = service
            .patch(Category::new("Dried Fruits").with_id(id))
            .await
            .unwrap();
        assert_eq!(patched.name.as_deref(), Some("Dried Fruits"));
        assert!(service.get_by_name("Dried").await.unwrap_err().is_not_found());
    }
}
