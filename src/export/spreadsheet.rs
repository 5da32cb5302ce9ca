// ABOUTME: Office Open XML (.xlsx) export encoder for coach records
// ABOUTME: Assembles a single-sheet workbook with inline string cells inside a deterministic zip container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{record_fields, ExportEncoder};
use crate::constants::export::{HEADERS, SHEET_NAME};
use crate::errors::{AppError, AppResult};
use crate::models::Coach;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const OFFICE_REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
    "</Types>"
);

const STYLES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#,
    r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
    r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>"#,
    "</styleSheet>"
);

/// Column letters for the four export columns
const COLUMNS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Single-sheet `.xlsx` workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetEncoder;

impl ExportEncoder for SpreadsheetEncoder {
    fn encode(&self, coaches: &[Coach]) -> AppResult<Vec<u8>> {
        let package_rels = package_rels_xml();
        let workbook = workbook_xml();
        let workbook_rels = workbook_rels_xml();
        let sheet = worksheet_xml(coaches);
        let parts: [(&str, &str); 6] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", &package_rels),
            ("xl/workbook.xml", &workbook),
            ("xl/_rels/workbook.xml.rels", &workbook_rels),
            ("xl/styles.xml", STYLES),
            ("xl/worksheets/sheet1.xml", &sheet),
        ];

        // Fixed timestamps keep the container byte-identical across runs
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            zip.start_file(name, options).map_err(|e| {
                AppError::export_encoding(format!("Failed to start workbook part {name}: {e}"))
                    .with_source(e)
            })?;
            zip.write_all(body.as_bytes()).map_err(|e| {
                AppError::export_encoding(format!("Failed to write workbook part {name}: {e}"))
                    .with_source(e)
            })?;
        }

        let bytes = zip
            .finish()
            .map_err(|e| {
                AppError::export_encoding(format!("Failed to finish workbook: {e}")).with_source(e)
            })?
            .into_inner();

        debug!(rows = coaches.len(), bytes = bytes.len(), "Encoded spreadsheet export");
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }
}

fn package_rels_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<Relationships xmlns="{RELATIONSHIPS_NS}"><Relationship Id="rId1" Type="{OFFICE_REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
    )
}

fn workbook_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<workbook xmlns="{SPREADSHEET_NS}" xmlns:r="{OFFICE_REL_NS}"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        html_escape::encode_double_quoted_attribute(SHEET_NAME)
    )
}

fn workbook_rels_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<Relationships xmlns="{RELATIONSHIPS_NS}"><Relationship Id="rId1" Type="{OFFICE_REL_NS}/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="{OFFICE_REL_NS}/styles" Target="styles.xml"/></Relationships>"#
    )
}

fn worksheet_xml(coaches: &[Coach]) -> String {
    let mut xml = format!(r#"{XML_DECLARATION}<worksheet xmlns="{SPREADSHEET_NS}"><sheetData>"#);

    push_row(&mut xml, 1, HEADERS.iter().copied());
    for (index, coach) in coaches.iter().enumerate() {
        let fields = record_fields(coach);
        push_row(&mut xml, index + 2, fields.iter().map(String::as_str));
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn push_row<'a>(xml: &mut String, row: usize, cells: impl Iterator<Item = &'a str>) {
    xml.push_str(&format!(r#"<row r="{row}">"#));
    for (column, value) in COLUMNS.iter().zip(cells) {
        let text = sanitize_xml_text(value);
        xml.push_str(&format!(
            r#"<c r="{column}{row}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            html_escape::encode_text(&text)
        ));
    }
    xml.push_str("</row>");
}

/// Drop characters XML 1.0 cannot represent
fn sanitize_xml_text(value: &str) -> String {
    value
        .chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        })
        .collect()
}
