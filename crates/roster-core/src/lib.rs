// ABOUTME: Core types and constants for the coach roster API
// ABOUTME: Foundation crate with error handling, the Coach model, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Roster Core
//!
//! Foundation crate providing shared types and constants for the coach roster API.
//! It changes infrequently so the server crate can compile incrementally against it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Identifier bounds, export layout, and service names
//! - **models**: `Coach`, `CoachId`, `ListQuery`, and the `ListFilter` precedence table

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Coach, `CoachId`, `ListQuery`, `ListFilter`)
pub mod models;
