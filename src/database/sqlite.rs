// ABOUTME: SQLite implementation of the read-only coach store
// ABOUTME: Parameterised LIKE queries with escaped terms, plus seeding helpers for tooling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{like_pattern, CoachStore, SQLITE_SCHEMA};
use crate::errors::{AppError, AppResult};
use crate::models::{Coach, CoachId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Row, SqlitePool,
};
use std::str::FromStr;

const SELECT_COLUMNS: &str = "SELECT id, name, country_name, image_url, created_at, updated_at FROM coaches";

/// `SQLite`-backed coach store
#[derive(Clone)]
pub struct SqliteCoachStore {
    pool: SqlitePool,
}

impl SqliteCoachStore {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if needed
    ///
    /// In-memory databases are pinned to a single connection so every query sees
    /// the same data.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the URL is malformed or the connection fails
    pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::storage(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            // Closing the only connection would drop the database
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::storage(format!("Failed to connect to SQLite: {e}")))?;

        Ok(Self::new(pool))
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert or replace a coach (seeding tools only)
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails
    pub async fn upsert(&self, coach: &Coach) -> AppResult<()> {
        let now = Utc::now();
        sqlx::query(
            r"
            INSERT INTO coaches (id, name, country_name, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                country_name = excluded.country_name,
                image_url = excluded.image_url,
                updated_at = excluded.updated_at
            ",
        )
        .bind(i64::from(coach.id))
        .bind(&coach.name)
        .bind(&coach.country_name)
        .bind(&coach.image_url)
        .bind(coach.created_at.unwrap_or(now))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to upsert coach {}: {e}", coach.id)))?;

        Ok(())
    }

    /// Number of stored coaches
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the read fails
    pub async fn count(&self) -> AppResult<u32> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coaches")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to count coaches: {e}")))?;

        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn fetch_matching(&self, column: &str, term: &str) -> AppResult<Vec<Coach>> {
        let query = format!("{SELECT_COLUMNS} WHERE {column} LIKE $1 ESCAPE '\\' ORDER BY id");
        let rows = sqlx::query(&query)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to search coaches by {column}: {e}")))?;

        rows.iter().map(row_to_coach).collect()
    }
}

#[async_trait]
impl CoachStore for SqliteCoachStore {
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(SQLITE_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to create coaches table: {e}")))?;
        Ok(())
    }

    async fn by_id(&self, id: CoachId) -> AppResult<Option<Coach>> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to get coach {id}: {e}")))?;

        row.map(|r| row_to_coach(&r)).transpose()
    }

    async fn by_name_substring(&self, term: &str) -> AppResult<Vec<Coach>> {
        // SQLite LIKE folds ASCII case
        self.fetch_matching("name", term).await
    }

    async fn by_country_substring(&self, term: &str) -> AppResult<Vec<Coach>> {
        self.fetch_matching("country_name", term).await
    }

    async fn all(&self) -> AppResult<Vec<Coach>> {
        let query = format!("{SELECT_COLUMNS} ORDER BY id");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to list coaches: {e}")))?;

        rows.iter().map(row_to_coach).collect()
    }

    fn backend_info(&self) -> &'static str {
        "SQLite"
    }
}

/// Convert a database row to a Coach struct
fn row_to_coach(row: &SqliteRow) -> AppResult<Coach> {
    let id: i64 = row.try_get("id")?;
    let id = CoachId::new(id)
        .map_err(|_| AppError::storage(format!("Stored coach id {id} is outside the roster range")))?;

    Ok(Coach {
        id,
        name: row.try_get("name")?,
        country_name: row.try_get("country_name")?,
        image_url: row.try_get::<Option<String>, _>("image_url")?.unwrap_or_default(),
        created_at: row.try_get::<Option<DateTime<Utc>>, _>("created_at")?,
        updated_at: row.try_get::<Option<DateTime<Utc>>, _>("updated_at")?,
    })
}
