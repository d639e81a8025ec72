//! Foundation types for the storefront catalog.
//!
//! Every other storefront crate depends on `storefront-types`.
//!
//! # Key Types
//!
//! - [`DocumentId`]: Store-assigned 12-byte identifier, rendered as 24 hex characters
//! - [`Category`], [`Customer`], [`Vendor`]: The three collection records
//! - [`Document`]: Shared contract: collection name, id access, merge-patch

pub mod document;
pub mod error;
pub mod id;
pub mod record;

pub use document::{Document, API_BASE};
pub use error::TypeError;
pub use id::{DocumentId, ID_HEX_LEN, ID_LEN};
pub use record::{Category, Customer, Vendor};
