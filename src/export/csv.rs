// ABOUTME: CSV export encoder for coach records
// ABOUTME: Writes a UTF-8 byte-order mark, the header row, then one flushed row per coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{record_fields, ExportEncoder};
use crate::constants::export::{HEADERS, UTF8_BOM};
use crate::errors::{AppError, AppResult};
use crate::models::Coach;
use tracing::debug;

/// BOM-prefixed, comma-separated UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl ExportEncoder for CsvEncoder {
    fn encode(&self, coaches: &[Coach]) -> AppResult<Vec<u8>> {
        let mut writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::CRLF)
            .from_writer(UTF8_BOM.to_vec());

        writer.write_record(HEADERS).map_err(encoding_error)?;
        for coach in coaches {
            writer
                .write_record(record_fields(coach))
                .map_err(encoding_error)?;
            writer.flush().map_err(|e| {
                AppError::export_encoding(format!("Failed to flush CSV row: {e}")).with_source(e)
            })?;
        }

        let bytes = writer.into_inner().map_err(|e| {
            let io = e.into_error();
            AppError::export_encoding(format!("Failed to finish CSV export: {io}")).with_source(io)
        })?;

        debug!(rows = coaches.len(), bytes = bytes.len(), "Encoded CSV export");
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}

fn encoding_error(error: ::csv::Error) -> AppError {
    AppError::export_encoding(format!("Failed to write CSV row: {error}")).with_source(error)
}
