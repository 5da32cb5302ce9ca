// ABOUTME: Record accessor translating validated request input into a single storage read
// ABOUTME: Applies identifier validation before storage access and the list filter precedence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CoachStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Coach, CoachId, ListFilter, ListQuery};
use std::sync::Arc;
use tracing::debug;

/// Issues at most one read per call against an injected [`CoachStore`]
#[derive(Clone)]
pub struct CoachAccessor {
    store: Arc<dyn CoachStore>,
}

impl CoachAccessor {
    /// Wrap a storage backend
    #[must_use]
    pub fn new(store: Arc<dyn CoachStore>) -> Self {
        Self { store }
    }

    /// Underlying storage backend
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CoachStore> {
        &self.store
    }

    /// Look up one coach by its raw path identifier
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` if `raw_id` is not an integer in range (storage is not read)
    /// - `NotFound` if no coach has that id
    /// - `StorageError` if the read fails
    pub async fn fetch_one(&self, raw_id: &str) -> AppResult<Coach> {
        let id = CoachId::parse(raw_id)?;
        self.store
            .by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Coach {id}")))
    }

    /// List coaches matching the highest-priority filter present in `query`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the read fails
    pub async fn fetch_many(&self, query: &ListQuery) -> AppResult<Vec<Coach>> {
        let filter = ListFilter::from_query(query);
        debug!(filter = filter.kind(), "Resolved coach list filter");

        match filter {
            ListFilter::Search(term) => self.store.by_name_substring(&term).await,
            ListFilter::AllList => self.store.all().await,
            ListFilter::Country(term) => self.store.by_country_substring(&term).await,
            ListFilter::Empty => Ok(Vec::new()),
        }
    }

    /// Every stored coach, for exports
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the read fails
    pub async fn fetch_all(&self) -> AppResult<Vec<Coach>> {
        self.store.all().await
    }
}
