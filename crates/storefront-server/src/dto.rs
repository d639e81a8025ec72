//! Wire representations of the catalog records.
//!
//! Conversions are explicit per record type. Decoding never carries an id:
//! ids come from the store on create and from the path on update and patch.
//! Encoding adds a self-link whenever the record's id is known.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_types::{Category, Customer, Document, Vendor};

/// Request/response body for one record type.
pub trait Representation: Serialize + DeserializeOwned + Send + 'static {
    type Record: Document;

    fn from_record(record: Self::Record) -> Self;

    /// Convert a decoded body into a record with no id.
    fn into_record(self) -> Self::Record;
}

/// `/api/v1/{collection}/{id}` for a record with a known id.
pub fn self_link<D: Document>(record: &D) -> Option<String> {
    record
        .id()
        .map(|id| format!("{}/{id}", D::collection_path()))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_url: Option<String>,
}

impl Representation for CategoryDto {
    type Record = Category;

    fn from_record(record: Category) -> Self {
        Self {
            category_url: self_link(&record),
            name: record.name,
        }
    }

    fn into_record(self) -> Category {
        Category {
            id: None,
            name: self.name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_url: Option<String>,
}

impl Representation for CustomerDto {
    type Record = Customer;

    fn from_record(record: Customer) -> Self {
        Self {
            customer_url: self_link(&record),
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }

    fn into_record(self) -> Customer {
        Customer {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorDto {
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_url: Option<String>,
}

impl Representation for VendorDto {
    type Record = Vendor;

    fn from_record(record: Vendor) -> Self {
        Self {
            vendor_url: self_link(&record),
            name: record.name,
        }
    }

    fn into_record(self) -> Vendor {
        Vendor {
            id: None,
            name: self.name,
        }
    }
}
