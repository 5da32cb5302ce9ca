// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: In-memory coach store fake, sample roster, router builders, and export parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `roster_api`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use roster_api::{
    config::{DatabaseConfig, DatabaseUrl, ServerConfig},
    database::{sqlite::SqliteCoachStore, CoachStore},
    errors::{AppError, AppResult},
    export::ExportEncoder,
    models::{Coach, CoachId},
    resources::ServerResources,
    server::build_router,
};
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Coach store held in memory that counts every read
#[derive(Default)]
pub struct MemoryCoachStore {
    coaches: Vec<Coach>,
    reads: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryCoachStore {
    pub fn new(mut coaches: Vec<Coach>) -> Self {
        coaches.sort_by_key(|c| c.id);
        Self {
            coaches,
            ..Self::default()
        }
    }

    /// Store whose every read fails with a storage error
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    /// Number of reads issued so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read(&self) -> AppResult<&[Coach]> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::storage("connection refused"));
        }
        Ok(&self.coaches)
    }

    fn matching(&self, term: &str, field: fn(&Coach) -> &str) -> AppResult<Vec<Coach>> {
        let needle = term.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|c| field(c).to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CoachStore for MemoryCoachStore {
    async fn migrate(&self) -> AppResult<()> {
        Ok(())
    }

    async fn by_id(&self, id: CoachId) -> AppResult<Option<Coach>> {
        Ok(self.read()?.iter().find(|c| c.id == id).cloned())
    }

    async fn by_name_substring(&self, term: &str) -> AppResult<Vec<Coach>> {
        self.matching(term, |c| c.name.as_str())
    }

    async fn by_country_substring(&self, term: &str) -> AppResult<Vec<Coach>> {
        self.matching(term, |c| c.country_name.as_str())
    }

    async fn all(&self) -> AppResult<Vec<Coach>> {
        Ok(self.read()?.to_vec())
    }

    fn backend_info(&self) -> &'static str {
        "memory"
    }
}

pub fn coach(id: i64, name: &str, country: &str) -> Coach {
    Coach::new(
        CoachId::new(id).unwrap(),
        name,
        country,
        format!("/static/coaches/{id}.png"),
    )
}

/// Small roster with mixed-case names and shared country substrings
pub fn sample_roster() -> Vec<Coach> {
    vec![
        coach(1, "Alan Smith", "England"),
        coach(2, "Joachim Löw", "Germany"),
        coach(3, "Walter SMITHSON", "New Zealand"),
        coach(4, "Didier Deschamps", "France"),
        coach(5, "Carlos Queiroz", "Iran"),
        coach(6, "Ange Postecoglou", "New Zealand"),
    ]
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            ..DatabaseConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Server resources over `store` with the default test configuration
pub fn test_resources(store: Arc<dyn CoachStore>) -> ServerResources {
    ServerResources::new(store, Arc::new(test_config()))
}

/// Full application router over prepared resources
pub fn router_for(resources: ServerResources) -> axum::Router {
    init_test_logging();
    build_router(Arc::new(resources))
}

/// Full application router over `store`
pub fn test_router(store: Arc<dyn CoachStore>) -> axum::Router {
    router_for(test_resources(store))
}

/// Encoder that always fails, for exercising export error responses
pub struct FailingEncoder;

impl ExportEncoder for FailingEncoder {
    fn encode(&self, _coaches: &[Coach]) -> AppResult<Vec<u8>> {
        Err(AppError::export_encoding("encoder unavailable"))
    }

    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }

    fn file_extension(&self) -> &'static str {
        "bin"
    }
}

/// Fresh in-memory `SQLite` store with the schema applied and `coaches` inserted
pub async fn create_sqlite_store(coaches: &[Coach]) -> SqliteCoachStore {
    init_test_logging();
    let store = SqliteCoachStore::connect("sqlite::memory:", 1).await.unwrap();
    store.migrate().await.unwrap();
    for c in coaches {
        store.upsert(c).await.unwrap();
    }
    store
}

/// Rows of a CSV export, after checking and stripping the byte-order mark
pub fn csv_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF", "CSV export must start with a BOM");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(&bytes[3..]);
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

/// Rows of the first worksheet in an `.xlsx` export
pub fn sheet_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    xml.split("<row ")
        .skip(1)
        .map(|row| {
            let row = row.split("</row>").next().unwrap();
            row.split("<t xml:space=\"preserve\">")
                .skip(1)
                .map(|cell| {
                    let text = cell.split("</t>").next().unwrap();
                    html_escape::decode_html_entities(text).into_owned()
                })
                .collect()
        })
        .collect()
}

/// Name of the first sheet declared in the workbook
pub fn sheet_name(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("xl/workbook.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    let start = xml.find("<sheet name=\"").unwrap() + "<sheet name=\"".len();
    let end = start + xml[start..].find('"').unwrap();
    xml[start..end].to_owned()
}
