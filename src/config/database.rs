// ABOUTME: Database configuration types for SQLite and PostgreSQL connections
// ABOUTME: Parses DATABASE_URL into a typed URL and carries pool and migration settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::env_var_or;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Default pool size when `DATABASE_MAX_CONNECTIONS` is unset
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// `PostgreSQL` connection
    PostgreSQL {
        /// `PostgreSQL` connection string
        connection_string: String,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if s.trim().is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }

        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str.trim_start_matches("//")),
                })
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Ok(Self::PostgreSQL {
                connection_string: s.to_owned(),
            })
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Check if this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }

    /// Check if this is a `PostgreSQL` database
    #[must_use]
    pub const fn is_postgresql(&self) -> bool {
        matches!(self, Self::PostgreSQL { .. })
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/roster.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection and management configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`SQLite` path or `PostgreSQL` connection string)
    pub url: DatabaseUrl,
    /// Create the coaches table on startup if it is missing
    pub auto_migrate: bool,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            auto_migrate: true,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if database environment variables are invalid
    pub fn from_env() -> AppResult<Self> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(raw) => DatabaseUrl::parse_url(&raw)?,
            Err(_) => DatabaseUrl::default(),
        };

        let max_connections: u32 = env_var_or("DATABASE_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| {
                AppError::config(format!("Invalid DATABASE_MAX_CONNECTIONS value: {e}"))
            })?;
        if max_connections == 0 {
            return Err(AppError::config(
                "DATABASE_MAX_CONNECTIONS must be at least 1",
            ));
        }

        Ok(Self {
            url,
            auto_migrate: env_var_or("AUTO_MIGRATE", "true")
                .parse()
                .map_err(|e| AppError::config(format!("Invalid AUTO_MIGRATE value: {e}")))?,
            max_connections,
        })
    }
}
