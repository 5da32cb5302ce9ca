// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints against healthy and failing stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{sample_roster, test_router, MemoryCoachStore};
use helpers::axum_test::AxumTestRequest;
use std::sync::Arc;

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let store = Arc::new(MemoryCoachStore::new(sample_roster()));
    let routes = test_router(store.clone());

    let response = AxumTestRequest::get("/health").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "roster-api");
    assert!(body["timestamp"].is_string());
    assert_eq!(store.reads(), 0);
}

#[tokio::test]
async fn test_health_ignores_storage_failure() {
    let routes = test_router(Arc::new(MemoryCoachStore::failing()));

    let response = AxumTestRequest::get("/health").send(routes).await;

    assert_eq!(response.status(), 200);
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let routes = test_router(Arc::new(MemoryCoachStore::new(sample_roster())));

    let response = AxumTestRequest::get("/ready").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "memory");
}

#[tokio::test]
async fn test_ready_reports_unavailable_store() {
    let routes = test_router(Arc::new(MemoryCoachStore::failing()));

    let response = AxumTestRequest::get("/ready").send(routes).await;

    assert_eq!(response.status(), 503);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let routes = test_router(Arc::new(MemoryCoachStore::new(sample_roster())));

    let response = AxumTestRequest::get("/nonexistent").send(routes).await;

    assert_eq!(response.status(), 404);
}
