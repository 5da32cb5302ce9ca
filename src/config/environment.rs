// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing for the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use super::{env_var_or, DatabaseConfig};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Cross-origin request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Prefix under which the coach routes are mounted (empty for none)
    pub base_path: String,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_owned(),
            base_path: String::new(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds a value that cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
            .parse()
            .map_err(|e| AppError::config(format!("Invalid HTTP_PORT value: {e}")))?;

        Ok(Self {
            http_port,
            host: env_var_or("HOST", DEFAULT_HOST),
            base_path: normalize_base_path(&env_var_or("API_BASE_PATH", "")),
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        })
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Roster API configuration: host={}, http_port={}, base_path='{}', database={}, auto_migrate={}, max_connections={}, cors_origins={}",
            self.host,
            self.http_port,
            self.base_path,
            redact_credentials(&self.database.url.to_connection_string()),
            self.database.auto_migrate,
            self.database.max_connections,
            self.cors.allowed_origins,
        )
    }
}

/// Normalize a mount prefix to `/segment` form, or empty for the root
#[must_use]
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Hide the password part of a connection string
fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    match rest.split_once('@') {
        Some((userinfo, host)) => {
            let user = userinfo.split(':').next().unwrap_or_default();
            format!("{scheme}://{user}:***@{host}")
        }
        None => url.to_owned(),
    }
}
