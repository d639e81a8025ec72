//! HTTP server for the storefront catalog.
//!
//! Exposes categories, customers and vendors under `/api/v1` with create,
//! read, list, full update, merge-patch and delete endpoints. Categories can
//! additionally be fetched by name.

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use dto::{CategoryDto, CustomerDto, Representation, VendorDto};
pub use error::{ServerError, ServerResult};
pub use router::{build_router, ROUTES};
pub use server::StorefrontServer;
pub use state::{AppState, InMemoryStores};
