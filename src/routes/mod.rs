// ABOUTME: Route module organization for the coach roster HTTP endpoints
// ABOUTME: Groups coach lookup/export routes and health probes by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the roster API
//!
//! Each domain module contains only route definitions and thin handler functions
//! that delegate to the accessor and export layers.

/// Coach lookup, listing, and export routes
pub mod coaches;
/// Health check and readiness routes
pub mod health;

/// Coach API response shape
pub use coaches::CoachResponse;
/// Coaches route handlers
pub use coaches::CoachesRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
