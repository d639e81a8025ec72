use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::dto::{CategoryDto, CustomerDto, VendorDto};
use crate::handler::{self, create, delete, get_one, list, patch, update};
use crate::state::AppState;

/// Every route the server exposes, as `(methods, path)`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/api/v1/health"),
    ("GET", "/api/v1/info"),
    ("GET POST", "/api/v1/categories"),
    ("GET PUT PATCH DELETE", "/api/v1/categories/:identifier"),
    ("GET POST", "/api/v1/customers"),
    ("GET PUT PATCH DELETE", "/api/v1/customers/:id"),
    ("GET POST", "/api/v1/vendors"),
    ("GET PUT PATCH DELETE", "/api/v1/vendors/:id"),
];

/// Build the axum router with all storefront endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handler::health_handler))
        .route("/api/v1/info", get(handler::info_handler))
        .route(
            "/api/v1/categories",
            get(list::<CategoryDto>).post(create::<CategoryDto>),
        )
        .route(
            "/api/v1/categories/:identifier",
            get(handler::get_category)
                .put(update::<CategoryDto>)
                .patch(patch::<CategoryDto>)
                .delete(delete::<CategoryDto>),
        )
        .route(
            "/api/v1/customers",
            get(list::<CustomerDto>).post(create::<CustomerDto>),
        )
        .route(
            "/api/v1/customers/:id",
            get(get_one::<CustomerDto>)
                .put(update::<CustomerDto>)
                .patch(patch::<CustomerDto>)
                .delete(delete::<CustomerDto>),
        )
        .route(
            "/api/v1/vendors",
            get(list::<VendorDto>).post(create::<VendorDto>),
        )
        .route(
            "/api/v1/vendors/:id",
            get(get_one::<VendorDto>)
                .put(update::<VendorDto>)
                .patch(patch::<VendorDto>)
                .delete(delete::<VendorDto>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
