// ABOUTME: Application-wide constants for the coach roster API
// ABOUTME: Identifier bounds, list modes, export layout, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Coach identifier and listing constants
pub mod coaches {
    /// Lowest valid roster slot
    pub const MIN_COACH_ID: u8 = 0;

    /// Highest valid roster slot
    pub const MAX_COACH_ID: u8 = 32;

    /// Value of the `return` query parameter that requests the full roster
    pub const RETURN_ALL_LIST: &str = "all_list";
}

/// Export layout constants shared by every encoder
pub mod export {
    /// Header row written before any record, in column order
    pub const HEADERS: [&str; 4] = ["id", "country_name", "name", "image_address"];

    /// Worksheet name used by the spreadsheet export ("coach information")
    pub const SHEET_NAME: &str = "教练信息";

    /// Prefix of every export filename
    pub const FILE_PREFIX: &str = "coach";

    /// UTF-8 byte-order mark prepended to delimited exports
    pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP API service
    pub const ROSTER_API: &str = "roster-api";
}
