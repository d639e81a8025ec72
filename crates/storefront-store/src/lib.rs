//! Document storage for the storefront catalog.
//!
//! Each catalog collection (categories, customers, vendors) is held by a
//! backend implementing [`DocumentStore`]. Categories additionally support a
//! lookup by name through [`CategoryStore`].
//!
//! # Storage Backends
//!
//! - [`InMemoryDocumentStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Every operation is async so backends can do non-blocking I/O.
//! 2. An empty lookup is `Ok(None)`; errors are reserved for backend failure.
//! 3. `save` is an upsert keyed on the document id.
//! 4. The store never interprets document fields beyond the id (and the
//!    category name for name lookups).

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use traits::{CategoryStore, DocumentStore};
