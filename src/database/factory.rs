// ABOUTME: Database factory selecting the coach store backend from the configured URL
// ABOUTME: Wraps SQLite or PostgreSQL behind one enum that implements CoachStore by delegation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sqlite::SqliteCoachStore;
use super::CoachStore;
use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use crate::models::{Coach, CoachId};
use async_trait::async_trait;
use tracing::info;

#[cfg(feature = "postgresql")]
use super::postgres::PostgresCoachStore;

/// Concrete storage backend chosen at startup
#[derive(Clone)]
pub enum Database {
    /// `SQLite` file or in-memory database
    SQLite(SqliteCoachStore),
    /// `PostgreSQL` server
    #[cfg(feature = "postgresql")]
    PostgreSQL(PostgresCoachStore),
}

impl Database {
    /// Connect to the configured database, running the schema step if enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is not compiled in, the connection fails,
    /// or migration fails
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let database = match &config.url {
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::storage(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                Self::SQLite(
                    SqliteCoachStore::connect(
                        &config.url.to_connection_string(),
                        config.max_connections,
                    )
                    .await?,
                )
            }
            DatabaseUrl::Memory => Self::SQLite(
                SqliteCoachStore::connect(&config.url.to_connection_string(), 1).await?,
            ),
            #[cfg(feature = "postgresql")]
            DatabaseUrl::PostgreSQL { connection_string } => Self::PostgreSQL(
                PostgresCoachStore::connect(connection_string, config.max_connections).await?,
            ),
            #[cfg(not(feature = "postgresql"))]
            DatabaseUrl::PostgreSQL { .. } => {
                return Err(AppError::config(
                    "PostgreSQL support requires building with the `postgresql` feature",
                ));
            }
        };

        if config.auto_migrate {
            database.migrate().await?;
            info!(backend = database.backend_info(), "Coaches schema ready");
        }

        Ok(database)
    }

    /// Insert or replace a coach (seeding tools only)
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails
    pub async fn upsert(&self, coach: &Coach) -> AppResult<()> {
        match self {
            Self::SQLite(store) => store.upsert(coach).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(store) => store.upsert(coach).await,
        }
    }

    /// Number of stored coaches
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the read fails
    pub async fn count(&self) -> AppResult<u32> {
        match self {
            Self::SQLite(store) => store.count().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(store) => store.count().await,
        }
    }

    fn inner(&self) -> &dyn CoachStore {
        match self {
            Self::SQLite(store) => store,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(store) => store,
        }
    }
}

#[async_trait]
impl CoachStore for Database {
    async fn migrate(&self) -> AppResult<()> {
        self.inner().migrate().await
    }

    async fn by_id(&self, id: CoachId) -> AppResult<Option<Coach>> {
        self.inner().by_id(id).await
    }

    async fn by_name_substring(&self, term: &str) -> AppResult<Vec<Coach>> {
        self.inner().by_name_substring(term).await
    }

    async fn by_country_substring(&self, term: &str) -> AppResult<Vec<Coach>> {
        self.inner().by_country_substring(term).await
    }

    async fn all(&self) -> AppResult<Vec<Coach>> {
        self.inner().all().await
    }

    fn backend_info(&self) -> &'static str {
        self.inner().backend_info()
    }
}
