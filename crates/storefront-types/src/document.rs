use crate::id::DocumentId;

/// Base path shared by every collection's HTTP resources.
pub const API_BASE: &str = "/api/v1";

/// A record stored in one of the catalog collections.
///
/// Implementors are flat records whose identifier is assigned by the store.
/// All non-id fields are optional: a stored document may lack a field, and a
/// patch carries only the fields it changes.
pub trait Document: Clone + Send + Sync + 'static {
    /// Collection name, also the URL path segment (e.g. `"customers"`).
    const COLLECTION: &'static str;

    /// Singular display name used in messages (e.g. `"Customer"`).
    const KIND: &'static str;

    /// The store-assigned identifier, `None` before creation.
    fn id(&self) -> Option<&DocumentId>;

    /// Replace the identifier.
    fn set_id(&mut self, id: Option<DocumentId>);

    /// Overwrite each field of `self` for which `patch` carries a value.
    ///
    /// Fields that are `None` in `patch` are left untouched. The id is never
    /// changed by a merge.
    fn merge_patch(&mut self, patch: Self);

    /// Builder-style variant of [`Document::set_id`].
    fn with_id(mut self, id: DocumentId) -> Self {
        self.set_id(Some(id));
        self
    }

    /// Path of this collection's resources, e.g. `/api/v1/customers`.
    fn collection_path() -> String {
        format!("{API_BASE}/{}", Self::COLLECTION)
    }
}
