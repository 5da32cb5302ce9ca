// ABOUTME: HTTP server assembly for the roster API
// ABOUTME: Merges coach and health routes, layers tracing and CORS, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{CoachesRoutes, HealthRoutes};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Roster API HTTP server
pub struct RosterServer {
    resources: Arc<ServerResources>,
}

impl RosterServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Full application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.resources))
    }

    /// Bind `host:port` and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(&self) -> AppResult<()> {
        let addr = format!(
            "{}:{}",
            self.resources.config.host, self.resources.config.http_port
        );
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")).with_source(e))?;

        info!(addr = %addr, "Roster API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

        info!("Roster API stopped");
        Ok(())
    }
}

/// Merge all routes and apply tracing and CORS layers
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CoachesRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
