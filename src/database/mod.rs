// ABOUTME: Database abstraction layer for the coach roster API
// ABOUTME: Read-only CoachStore trait with SQLite and PostgreSQL backends and the record accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach storage
//!
//! [`CoachStore`] is the storage capability handed to request handlers. It exposes a
//! closed set of typed, parameterised reads; nothing in the API path writes.
//! [`CoachAccessor`] sits on top and turns validated request input into exactly one
//! of those reads.

use crate::errors::AppResult;
use crate::models::{Coach, CoachId};
use async_trait::async_trait;

/// Request-level record accessor
pub mod accessor;

/// Backend selection by database URL
pub mod factory;

/// `SQLite` backend
pub mod sqlite;

/// `PostgreSQL` backend
#[cfg(feature = "postgresql")]
pub mod postgres;

pub use accessor::CoachAccessor;
pub use factory::Database;

/// Schema for the coaches table, shared by the migration step and tests
pub const SQLITE_SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS coaches (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        country_name TEXT NOT NULL,
        image_url TEXT NOT NULL DEFAULT '',
        created_at TEXT,
        updated_at TEXT
    )
";

/// Read-only storage for coach records
///
/// Name and country matches are case-insensitive substring matches. Results are
/// ordered by id.
#[async_trait]
pub trait CoachStore: Send + Sync {
    /// Create the coaches table if it does not exist
    async fn migrate(&self) -> AppResult<()>;

    /// Equality read on the identifier
    async fn by_id(&self, id: CoachId) -> AppResult<Option<Coach>>;

    /// Coaches whose name contains `term`
    async fn by_name_substring(&self, term: &str) -> AppResult<Vec<Coach>>;

    /// Coaches whose country name contains `term`
    async fn by_country_substring(&self, term: &str) -> AppResult<Vec<Coach>>;

    /// Every stored coach
    async fn all(&self) -> AppResult<Vec<Coach>>;

    /// Backend description for startup logs
    fn backend_info(&self) -> &'static str;
}

/// Escape `term` for use inside a `LIKE ... ESCAPE '\'` pattern and wrap it in `%`
///
/// Wildcards typed by the client match literally.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("smith"), "%smith%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%"), r"%50\%%");
        assert_eq!(like_pattern("a_b"), r"%a\_b%");
        assert_eq!(like_pattern(r"c:\x"), r"%c:\\x%");
    }
}
