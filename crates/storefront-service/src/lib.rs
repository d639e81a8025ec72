//! Resource services for the storefront catalog.
//!
//! A service sits between the HTTP layer and a [`storefront_store`] backend.
//! It turns empty lookups into [`ServiceError::NotFound`], implements the
//! merge-patch rule, and otherwise passes calls straight through to the store.
//!
//! - [`ResourceService`]: the contract shared by every collection
//! - [`CategoryService`]: adds lookup by name and id-or-name dispatch
//! - [`seed`]: fills empty collections with sample rows at startup

pub mod category;
pub mod error;
pub mod resource;
pub mod seed;

pub use category::{CategoryLookup, CategoryService};
pub use error::{LookupKey, ServiceError, ServiceResult};
pub use resource::{CustomerService, ResourceService, VendorService};
pub use seed::{ensure_sample_data, CollectionSeed, SeedReport};

// Re-export key types
pub use storefront_types::{Category, Customer, Document, DocumentId, Vendor};
