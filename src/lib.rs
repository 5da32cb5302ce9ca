// ABOUTME: Main library entry point for the coach roster API
// ABOUTME: Read-only REST API over a relational coach store with spreadsheet and CSV exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Roster API
//!
//! A read-only HTTP API for querying and exporting coach records.
//!
//! ## Features
//!
//! - **Lookup**: `GET /coaches/:id` for roster slots `0..=32`
//! - **Filtered listing**: `GET /coaches?search=`, `?return=all_list`, `?country=`
//! - **Exports**: `GET /coaches/export` (`.xlsx`) and `GET /coaches/export.csv`
//! - **Pluggable storage**: `SQLite` by default, `PostgreSQL` behind the `postgresql` feature
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers that validate input and shape responses
//! - **Database**: the [`database::CoachStore`] trait and the [`database::CoachAccessor`]
//!   that issues one read per request
//! - **Export**: encoders turning a record list into a file payload
//! - **Config**: environment-driven server and database settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use roster_api::config::ServerConfig;
//! use roster_api::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Roster API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Error taxonomy and HTTP error bodies
pub use roster_core::errors;

/// Domain constants shared by storage, validation, and export
pub use roster_core::constants;

/// Coach records, identifiers, and list query types
pub use roster_core::models;

/// Environment-driven configuration
pub mod config;

/// Coach storage backends and the record accessor
pub mod database;

/// Spreadsheet and CSV export encoders
pub mod export;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared request state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;
