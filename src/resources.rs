// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the coach accessor, export encoders, and the immutable server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database::{CoachAccessor, CoachStore};
use crate::export::{ExportEncoder, ExportFormat};
use std::sync::Arc;

/// Immutable state shared across request tasks
#[derive(Clone)]
pub struct ServerResources {
    /// Record accessor over the configured store
    pub coaches: CoachAccessor,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    spreadsheet_encoder: Arc<dyn ExportEncoder>,
    csv_encoder: Arc<dyn ExportEncoder>,
}

impl ServerResources {
    /// Bundle a storage backend with the server configuration
    #[must_use]
    pub fn new(store: Arc<dyn CoachStore>, config: Arc<ServerConfig>) -> Self {
        Self {
            coaches: CoachAccessor::new(store),
            config,
            spreadsheet_encoder: ExportFormat::Spreadsheet.encoder(),
            csv_encoder: ExportFormat::Csv.encoder(),
        }
    }

    /// Replace the encoder used for `format`
    #[must_use]
    pub fn with_encoder(mut self, format: ExportFormat, encoder: Arc<dyn ExportEncoder>) -> Self {
        match format {
            ExportFormat::Spreadsheet => self.spreadsheet_encoder = encoder,
            ExportFormat::Csv => self.csv_encoder = encoder,
        }
        self
    }

    /// Encoder serving `format` downloads
    #[must_use]
    pub fn encoder(&self, format: ExportFormat) -> Arc<dyn ExportEncoder> {
        match format {
            ExportFormat::Spreadsheet => Arc::clone(&self.spreadsheet_encoder),
            ExportFormat::Csv => Arc::clone(&self.csv_encoder),
        }
    }
}
