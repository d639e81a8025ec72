use std::sync::Arc;

use axum::extract::FromRef;
use storefront_service::{
    ensure_sample_data, CategoryService, CustomerService, ResourceService, SeedReport,
    ServiceResult, VendorService,
};
use storefront_store::InMemoryDocumentStore;
use storefront_types::{Category, Customer, Vendor};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub customers: CustomerService,
    pub vendors: VendorService,
}

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<AppState> for ResourceService<Category> {
    fn from_ref(state: &AppState) -> Self {
        state.categories.records().clone()
    }
}

impl FromRef<AppState> for ResourceService<Customer> {
    fn from_ref(state: &AppState) -> Self {
        state.customers.clone()
    }
}

impl FromRef<AppState> for ResourceService<Vendor> {
    fn from_ref(state: &AppState) -> Self {
        state.vendors.clone()
    }
}

/// One in-memory store per collection.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStores {
    pub categories: Arc<InMemoryDocumentStore<Category>>,
    pub customers: Arc<InMemoryDocumentStore<Customer>>,
    pub vendors: Arc<InMemoryDocumentStore<Vendor>>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Services backed by these stores.
    pub fn app_state(&self) -> AppState {
        AppState {
            categories: CategoryService::new(self.categories.clone()),
            customers: CustomerService::new(self.customers.clone()),
            vendors: VendorService::new(self.vendors.clone()),
        }
    }

    /// Fill empty collections with the sample rows.
    pub async fn seed(&self) -> ServiceResult<SeedReport> {
        ensure_sample_data(&*self.categories, &*self.customers, &*self.vendors).await
    }
}
