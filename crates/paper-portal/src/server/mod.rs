//! HTTP server.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::search::SearchService;
use crate::secondary::{SecondarySource, SimulatedWebSource};

pub use routes::{ApiError, AppState, create_router};

/// The portal's HTTP server.
pub struct PortalServer {
    search: SearchService,
    secondary: Arc<dyn SecondarySource>,
}

impl PortalServer {
    /// Create a server with the simulated secondary source.
    #[must_use]
    pub fn new(search: SearchService) -> Self {
        Self { search, secondary: Arc::new(SimulatedWebSource) }
    }

    /// Replace the secondary source.
    #[must_use]
    pub fn with_secondary(mut self, secondary: Arc<dyn SecondarySource>) -> Self {
        self.secondary = secondary;
        self
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(self) -> axum::Router {
        create_router(AppState { search: self.search, secondary: self.secondary })
    }

    /// Run the server until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        tracing::info!(
            has_api_key = self.search.has_api_key(),
            secondary = self.secondary.name(),
            "Starting HTTP server"
        );

        let router = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for PortalServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalServer")
            .field("search", &self.search)
            .field("secondary", &self.secondary.name())
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
