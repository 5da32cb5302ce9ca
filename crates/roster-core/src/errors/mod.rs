// ABOUTME: Unified error handling for the coach roster API
// ABOUTME: Defines error codes, the AppError type, HTTP status mapping, and response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure a handler can produce is an [`AppError`] carrying an [`ErrorCode`].
//! The code decides the HTTP status; the message is surfaced to the client verbatim
//! inside an [`ErrorResponse`] body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Identifier missing, non-numeric, or outside the roster range
    #[serde(rename = "INVALID_IDENTIFIER")]
    InvalidIdentifier = 3000,
    /// Query-string binding failed
    #[serde(rename = "INVALID_PARAMETERS")]
    InvalidParameters = 3001,

    // Resource Management (4000-4999)
    /// No record matches a single-item lookup
    #[serde(rename = "NOT_FOUND")]
    NotFound = 4000,

    // Configuration (6000-6999)
    /// Startup configuration is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unclassified server fault
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Underlying read against the relational store failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// An export encoder could not produce its payload
    #[serde(rename = "EXPORT_ENCODING_ERROR")]
    ExportEncodingError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    ///
    /// Domain read failures, including a missing record, all answer 400.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidIdentifier | Self::InvalidParameters | Self::NotFound | Self::StorageError => {
                400
            }

            // 500 Internal Server Error
            Self::ExportEncodingError | Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "The coach identifier is not allowed",
            Self::InvalidParameters => "The query parameters are invalid",
            Self::NotFound => "The requested coach was not found",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::StorageError => "Storage operation failed",
            Self::ExportEncodingError => "Export encoding failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Identifier rejected before storage access
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidIdentifier, message)
    }

    /// Query parameters could not be bound
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameters, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Storage read fault
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Export encoder fault
    pub fn export_encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExportEncodingError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message, including the underlying cause when there is one
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {error}")).with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::storage(format!("Database query failed: {error}")).with_source(error)
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error.code = ?self.code, error.message = %self.message, "Request failed");
        } else if self.code == ErrorCode::StorageError {
            tracing::warn!(error.code = ?self.code, error.message = %self.message, "Storage read failed");
        } else {
            tracing::debug!(error.code = ?self.code, error.message = %self.message, "Request rejected");
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}
