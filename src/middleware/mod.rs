// ABOUTME: HTTP middleware for the roster API router
// ABOUTME: CORS configuration layered over the coach and health routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing layer
pub mod cors;

// CORS configuration
pub use cors::setup_cors;
