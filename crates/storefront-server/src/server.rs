use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::InMemoryStores;

/// Storefront HTTP server backed by in-memory stores.
pub struct StorefrontServer {
    config: ServerConfig,
    stores: InMemoryStores,
}

impl StorefrontServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            stores: InMemoryStores::new(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn stores(&self) -> &InMemoryStores {
        &self.stores
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let router = build_router(self.stores.app_state());
        if self.config.permissive_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Seed sample rows if enabled. Run once before serving.
    pub async fn bootstrap(&self) -> ServerResult<()> {
        if !self.config.seed_sample_data {
            tracing::info!("sample data disabled");
            return Ok(());
        }
        let report = self.stores.seed().await?;
        tracing::info!(
            categories = report.categories.total,
            customers = report.customers.total,
            vendors = report.vendors.total,
            "bootstrap complete"
        );
        Ok(())
    }

    /// Seed, then serve requests until ctrl-c.
    pub async fn serve(self) -> ServerResult<()> {
        self.bootstrap().await?;
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("storefront listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
