// ABOUTME: Route handlers for the read-only coach roster REST API
// ABOUTME: Lookup by id, filtered listing, and spreadsheet/CSV downloads of the full roster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaches routes
//!
//! Handlers validate their input, issue a single read through the
//! [`CoachAccessor`](crate::database::CoachAccessor), and shape the result as JSON
//! or as a file attachment. Authentication is enforced outside this router.

use crate::{
    errors::AppError,
    export::{ExportFormat, ExportPayload},
    models::{Coach, ListQuery},
    resources::ServerResources,
};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// API shape of a coach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachResponse {
    /// Roster slot identifier
    pub id: u8,
    /// Display name
    pub name: String,
    /// Country the coach represents
    pub country_name: String,
    /// Portrait image location
    pub image_url: String,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id.value(),
            name: coach.name,
            country_name: coach.country_name,
            image_url: coach.image_url,
        }
    }
}

/// Coaches routes implementation
pub struct CoachesRoutes;

impl CoachesRoutes {
    /// Create all coach routes, mounted under the configured base path
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let base = format!("{}/coaches", resources.config.base_path);

        Router::new()
            .route(&base, get(Self::handle_list))
            .route(&format!("{base}/export"), get(Self::handle_export_spreadsheet))
            .route(&format!("{base}/export.csv"), get(Self::handle_export_csv))
            .route(&format!("{base}/:id"), get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /coaches/:id - Get a specific coach
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        // Undecodable segments (e.g. invalid UTF-8) are identifier errors too
        let Path(id) = path.map_err(|rejection| {
            AppError::invalid_identifier(rejection.body_text()).with_source(rejection)
        })?;

        let coach = resources.coaches.fetch_one(&id).await?;

        let response: CoachResponse = coach.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /coaches - List coaches by search term, country, or all
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<ListQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|rejection| {
            AppError::invalid_parameters(rejection.body_text()).with_source(rejection)
        })?;

        let coaches = resources.coaches.fetch_many(&query).await?;
        debug!(count = coaches.len(), "Listed coaches");

        let response: Vec<CoachResponse> = coaches.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /coaches/export - Download the roster as a workbook
    async fn handle_export_spreadsheet(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        Self::export(&resources, ExportFormat::Spreadsheet).await
    }

    /// Handle GET /coaches/export.csv - Download the roster as CSV
    async fn handle_export_csv(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        Self::export(&resources, ExportFormat::Csv).await
    }

    async fn export(resources: &ServerResources, format: ExportFormat) -> Result<Response, AppError> {
        let coaches = resources.coaches.fetch_all().await?;
        let encoder = resources.encoder(format);
        let payload = ExportPayload::build_with(encoder.as_ref(), &coaches, Utc::now())?;

        info!(
            format = format.as_str(),
            rows = coaches.len(),
            bytes = payload.bytes.len(),
            filename = %payload.filename,
            "Generated coach export"
        );

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, payload.content_type.to_owned()),
                (header::CONTENT_DISPOSITION, payload.content_disposition()),
            ],
            payload.bytes,
        )
            .into_response())
    }
}
