use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use storefront_service::{CategoryService, ResourceService, ServiceError};
use storefront_types::{Category, Customer, Document, DocumentId, Vendor};

use crate::dto::{CategoryDto, Representation};
use crate::error::ServerResult;
use crate::state::AppState;

type Service<W> = ResourceService<<W as Representation>::Record>;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler: service identity plus per-collection document counts.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let categories = state.categories.count().await?;
    let customers = state.customers.count().await?;
    let vendors = state.vendors.count().await?;
    Ok(Json(json!({
        "name": "storefront",
        "version": env!("CARGO_PKG_VERSION"),
        "collections": [Category::COLLECTION, Customer::COLLECTION, Vendor::COLLECTION],
        "documents": {
            "categories": categories,
            "customers": customers,
            "vendors": vendors,
        },
    })))
}

// ---------------------------------------------------------------------------
// Path ids
// ---------------------------------------------------------------------------

// A malformed id can name no stored document.
fn existing_id<D: Document>(raw: &str) -> ServerResult<DocumentId> {
    DocumentId::from_hex(raw).map_err(|_| ServiceError::not_found_id::<D>(raw).into())
}

// An upsert needs an id it can store under.
fn target_id<D: Document>(raw: &str) -> ServerResult<DocumentId> {
    DocumentId::from_hex(raw).map_err(|e| {
        ServiceError::UpdateFailed(format!("invalid {} id {raw}: {e}", D::KIND)).into()
    })
}

// ---------------------------------------------------------------------------
// Shared collection handlers
// ---------------------------------------------------------------------------

/// `GET /api/v1/{collection}`
pub async fn list<W: Representation>(
    State(service): State<Service<W>>,
) -> ServerResult<Json<Vec<W>>> {
    let records = service.list_all().await?;
    Ok(Json(records.into_iter().map(W::from_record).collect()))
}

/// `GET /api/v1/{collection}/{id}`
pub async fn get_one<W: Representation>(
    State(service): State<Service<W>>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<W>> {
    let id = existing_id::<W::Record>(&raw_id)?;
    let record = service.get_by_id(&id).await?;
    Ok(Json(W::from_record(record)))
}

/// `POST /api/v1/{collection}`
pub async fn create<W: Representation>(
    State(service): State<Service<W>>,
    Json(body): Json<W>,
) -> ServerResult<(StatusCode, Json<W>)> {
    let created = service.create(body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(W::from_record(created))))
}

/// `PUT /api/v1/{collection}/{id}`
pub async fn update<W: Representation>(
    State(service): State<Service<W>>,
    Path(raw_id): Path<String>,
    Json(body): Json<W>,
) -> ServerResult<Json<W>> {
    let id = target_id::<W::Record>(&raw_id)?;
    let updated = service.update(body.into_record().with_id(id)).await?;
    Ok(Json(W::from_record(updated)))
}

/// `PATCH /api/v1/{collection}/{id}`
pub async fn patch<W: Representation>(
    State(service): State<Service<W>>,
    Path(raw_id): Path<String>,
    Json(body): Json<W>,
) -> ServerResult<Json<W>> {
    let id = existing_id::<W::Record>(&raw_id)?;
    let patched = service.patch(body.into_record().with_id(id)).await?;
    Ok(Json(W::from_record(patched)))
}

/// `DELETE /api/v1/{collection}/{id}`
pub async fn delete<W: Representation>(
    State(service): State<Service<W>>,
    Path(raw_id): Path<String>,
) -> ServerResult<StatusCode> {
    if let Ok(id) = DocumentId::from_hex(&raw_id) {
        service.delete(&id).await?;
    }
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// `GET /api/v1/categories/{identifier}`: id or name, decided by syntax.
pub async fn get_category(
    State(service): State<CategoryService>,
    Path(identifier): Path<String>,
) -> ServerResult<Json<CategoryDto>> {
    let category = service.get_by_identifier(&identifier).await?;
    Ok(Json(CategoryDto::from_record(category)))
}
