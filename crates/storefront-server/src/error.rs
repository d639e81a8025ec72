use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storefront_service::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::UpdateFailed(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_service::Customer;
    use storefront_store::StoreError;

    #[test]
    fn status_mapping() {
        let not_found: ServerError = ServiceError::not_found_id::<Customer>("x").into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let bad: ServerError = ServiceError::UpdateFailed("bad id".into()).into();
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let store: ServerError =
            ServiceError::from(StoreError::Unavailable("down".into())).into();
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn service_message_is_transparent() {
        let err: ServerError = ServiceError::not_found_id::<Customer>("abc").into();
        assert_eq!(err.to_string(), "Customer with id abc not found");
    }
}
