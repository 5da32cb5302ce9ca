// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness reports the process is up; readiness confirms the coach store answers a read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` never touches storage. `/ready` performs one read so load balancers
//! stop routing to an instance whose database is gone.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": crate::constants::service_names::ROSTER_API,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(State(resources): State<Arc<ServerResources>>) -> Response {
        let store = resources.coaches.store();
        match store.all().await {
            Ok(_) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "database": store.backend_info(),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({
                        "status": "unavailable",
                        "database": store.backend_info(),
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })),
                )
                    .into_response()
            }
        }
    }
}
