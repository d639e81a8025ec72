//! Sample-data bootstrap.
//!
//! [`ensure_sample_data`] is meant to be called once at startup. Each
//! collection is filled with a fixed set of rows only if it is empty, so
//! calling it again is harmless.

use storefront_store::DocumentStore;
use storefront_types::{Category, Customer, Document, Vendor};

use crate::error::ServiceResult;

pub const SAMPLE_CATEGORIES: [&str; 5] = ["Fruits", "Dried", "Fresh", "Exotic", "Nuts"];

pub const SAMPLE_CUSTOMERS: [(&str, &str); 7] = [
    ("Rishu", "Singh"),
    ("Atul", "Singh"),
    ("Chotu", "Singh"),
    ("Abhishek", "Singh"),
    ("Shivang", "Verma"),
    ("Vivek", "Pandey"),
    ("Saumil", "Thripathi"),
];

pub const SAMPLE_VENDORS: [&str; 6] = [
    "Signature Technologies Ltd.",
    "Vandela Technologies Ltd.",
    "Apple Technologies Ltd.",
    "Microsoft Technologies Ltd.",
    "Google Technologies Ltd.",
    "Facebook Technologies Ltd.",
];

/// Outcome of seeding one collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectionSeed {
    /// Rows written by this call (0 if the collection was already populated).
    pub inserted: u64,
    /// Document count after seeding.
    pub total: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: CollectionSeed,
    pub customers: CollectionSeed,
    pub vendors: CollectionSeed,
}

/// Fill each empty collection with the sample rows.
pub async fn ensure_sample_data(
    categories: &dyn DocumentStore<Category>,
    customers: &dyn DocumentStore<Customer>,
    vendors: &dyn DocumentStore<Vendor>,
) -> ServiceResult<SeedReport> {
    Ok(SeedReport {
        categories: seed_collection(categories, SAMPLE_CATEGORIES.map(Category::new)).await?,
        customers: seed_collection(
            customers,
            SAMPLE_CUSTOMERS.map(|(first, last)| Customer::new(first, last)),
        )
        .await?,
        vendors: seed_collection(vendors, SAMPLE_VENDORS.map(Vendor::new)).await?,
    })
}

async fn seed_collection<D: Document>(
    store: &dyn DocumentStore<D>,
    rows: impl IntoIterator<Item = D>,
) -> ServiceResult<CollectionSeed> {
    let count = store.count().await?;
    if count > 0 {
        tracing::info!(collection = D::COLLECTION, count, "documents already present");
        return Ok(CollectionSeed {
            inserted: 0,
            total: count,
        });
    }

    tracing::debug!(collection = D::COLLECTION, "loading sample documents");
    let mut inserted = 0;
    for row in rows {
        store.save(row).await?;
        inserted += 1;
    }
    let total = store.count().await?;
    tracing::info!(collection = D::COLLECTION, total, "sample documents added");
    Ok(CollectionSeed { inserted, total })
}
