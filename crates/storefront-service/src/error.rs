use std::fmt;

use storefront_types::Document;
use thiserror::Error;

/// The key a failed lookup was made with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupKey {
    Id(String),
    Name(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Name(name) => write!(f, "name {name}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{kind} with {key} not found")]
    NotFound { kind: &'static str, key: LookupKey },

    #[error("update failed: {0}")]
    UpdateFailed(String),

    #[error("store error: {0}")]
    Store(#[from] storefront_store::StoreError),
}

impl ServiceError {
    /// No `D` document has the given id.
    pub fn not_found_id<D: Document>(id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind: D::KIND,
            key: LookupKey::Id(id.to_string()),
        }
    }

    /// No `D` document has the given name.
    pub fn not_found_name<D: Document>(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: D::KIND,
            key: LookupKey::Name(name.into()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::{Category, Customer};

    #[test]
    fn not_found_messages() {
        let err = ServiceError::not_found_id::<Customer>("abc");
        assert_eq!(err.to_string(), "Customer with id abc not found");

        let err = ServiceError::not_found_name::<Category>("Fruits");
        assert_eq!(err.to_string(), "Category with name Fruits not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn update_failed_is_not_not_found() {
        assert!(!ServiceError::UpdateFailed("x".into()).is_not_found());
    }
}
