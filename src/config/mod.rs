// ABOUTME: Configuration module for the coach roster API server
// ABOUTME: Environment-only configuration for HTTP, database, CORS, and route mounting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings come from environment variables; binaries may override a few of
//! them from the command line.

/// Database URL and pool configuration
pub mod database;

/// Server configuration loaded from the process environment
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, ServerConfig};

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
