// ABOUTME: Export encoders flattening coach records into downloadable tabular files
// ABOUTME: Shared header layout, field coercion, and attachment naming for spreadsheet and CSV output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Export encoders
//!
//! Every encoder writes the same four columns in the same order, header first,
//! with every field coerced to a string. Encoding is deterministic: identical input
//! yields identical bytes. Only the attachment filename carries a timestamp.

use crate::constants::export::FILE_PREFIX;
use crate::errors::AppResult;
use crate::models::Coach;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Delimited-text (CSV) encoder
pub mod csv;

/// Office Open XML workbook encoder
pub mod spreadsheet;

pub use self::csv::CsvEncoder;
pub use self::spreadsheet::SpreadsheetEncoder;

/// Flattens a coach collection into a file payload
pub trait ExportEncoder: Send + Sync {
    /// Encode `coaches` in order, header row first
    ///
    /// # Errors
    ///
    /// Returns `ExportEncodingError` if the payload cannot be produced
    fn encode(&self, coaches: &[Coach]) -> AppResult<Vec<u8>>;

    /// MIME type of the payload
    fn content_type(&self) -> &'static str;

    /// Filename extension, without the dot
    fn file_extension(&self) -> &'static str;
}

/// Available export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `.xlsx` workbook
    Spreadsheet,
    /// BOM-prefixed UTF-8 CSV
    Csv,
}

impl ExportFormat {
    /// Encoder for this format
    #[must_use]
    pub fn encoder(self) -> Arc<dyn ExportEncoder> {
        match self {
            Self::Spreadsheet => Arc::new(SpreadsheetEncoder),
            Self::Csv => Arc::new(CsvEncoder),
        }
    }

    /// Short label for structured logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spreadsheet => "spreadsheet",
            Self::Csv => "csv",
        }
    }
}

/// An encoded export ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ExportPayload {
    /// Attachment filename
    pub filename: String,
    /// MIME type
    pub content_type: &'static str,
    /// Encoded file
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    /// Encode `coaches` with `format`, naming the file after `generated_at`
    ///
    /// # Errors
    ///
    /// Returns `ExportEncodingError` if the encoder fails
    pub fn build(
        format: ExportFormat,
        coaches: &[Coach],
        generated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Self::build_with(format.encoder().as_ref(), coaches, generated_at)
    }

    /// Encode `coaches` with an explicit encoder
    ///
    /// # Errors
    ///
    /// Returns `ExportEncodingError` if the encoder fails
    pub fn build_with(
        encoder: &dyn ExportEncoder,
        coaches: &[Coach],
        generated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let bytes = encoder.encode(coaches)?;
        Ok(Self {
            filename: attachment_filename(encoder.file_extension(), generated_at),
            content_type: encoder.content_type(),
            bytes,
        })
    }

    /// `Content-Disposition` header value
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}

/// `coach_<unix seconds>.<extension>`
#[must_use]
pub fn attachment_filename(extension: &str, generated_at: DateTime<Utc>) -> String {
    format!("{FILE_PREFIX}_{}.{extension}", generated_at.timestamp())
}

/// A coach as one export row, matching `constants::export::HEADERS`
#[must_use]
pub fn record_fields(coach: &Coach) -> [String; 4] {
    [
        coach.id.to_string(),
        coach.country_name.clone(),
        coach.name.clone(),
        coach.image_url.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoachId;
    use chrono::TimeZone;

    #[test]
    fn test_attachment_filename_uses_unix_seconds() {
        let at = Utc.with_ymd_and_hms(2018, 6, 14, 15, 0, 0).unwrap();
        assert_eq!(attachment_filename("csv", at), "coach_1528988400.csv");
    }

    #[test]
    fn test_record_fields_follow_header_order() {
        let coach = Coach::new(
            CoachId::new(9).unwrap(),
            "Didier Deschamps",
            "France",
            "/img/deschamps.png",
        );
        assert_eq!(
            record_fields(&coach),
            [
                "9".to_owned(),
                "France".to_owned(),
                "Didier Deschamps".to_owned(),
                "/img/deschamps.png".to_owned()
            ]
        );
    }

    #[test]
    fn test_payload_disposition() {
        let at = Utc.with_ymd_and_hms(2018, 6, 14, 15, 0, 0).unwrap();
        let payload = ExportPayload::build(ExportFormat::Spreadsheet, &[], at).unwrap();
        assert_eq!(
            payload.content_disposition(),
            "attachment; filename=coach_1528988400.xlsx"
        );
    }
}
