// ABOUTME: Coach roster entity and the bounded coach identifier
// ABOUTME: CoachId parsing rejects anything outside the 0..=32 roster range before storage access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::coaches::{MAX_COACH_ID, MIN_COACH_ID};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roster slot identifier, always within `MIN_COACH_ID..=MAX_COACH_ID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CoachId(u8);

impl CoachId {
    /// Build an identifier from a roster slot number
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if the slot is outside the roster range
    pub fn new(slot: i64) -> AppResult<Self> {
        u8::try_from(slot)
            .ok()
            .filter(|s| (MIN_COACH_ID..=MAX_COACH_ID).contains(s))
            .map(Self)
            .ok_or_else(|| {
                AppError::invalid_identifier(format!(
                    "coach id {slot} is not allowed (expected {MIN_COACH_ID}..={MAX_COACH_ID})"
                ))
            })
    }

    /// Parse a raw path segment into an identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if the text is empty, non-numeric, or out of range
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.is_empty() {
            return Err(AppError::invalid_identifier("coach id is missing"));
        }
        let slot: i64 = raw.parse().map_err(|_| {
            AppError::invalid_identifier(format!("coach id '{raw}' is not an integer"))
        })?;
        Self::new(slot)
    }

    /// Roster slot number
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for CoachId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for CoachId {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CoachId> for u8 {
    fn from(id: CoachId) -> Self {
        id.0
    }
}

impl From<CoachId> for i64 {
    fn from(id: CoachId) -> Self {
        Self::from(id.0)
    }
}

impl fmt::Display for CoachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coach as stored in the relational store
///
/// Bookkeeping timestamps are storage-only and never leave the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    /// Roster slot
    pub id: CoachId,
    /// Display name
    pub name: String,
    /// Country the coach represents
    pub country_name: String,
    /// Image URL or path
    #[serde(default)]
    pub image_url: String,
    /// Row creation time, when the store records it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last row update time, when the store records it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Coach {
    /// Build a coach without bookkeeping timestamps
    pub fn new(
        id: CoachId,
        name: impl Into<String>,
        country_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country_name: country_name.into(),
            image_url: image_url.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_accepts_range_bounds() {
        assert_eq!(CoachId::parse("0").unwrap().value(), 0);
        assert_eq!(CoachId::parse("32").unwrap().value(), 32);
        assert_eq!(CoachId::parse("17").unwrap().value(), 17);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for raw in ["33", "-1", "1000"] {
            let err = CoachId::parse(raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidIdentifier, "input {raw}");
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_and_empty() {
        for raw in ["", "abc", "1.5", " 3", "99999999999999999999999"] {
            let err = CoachId::parse(raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidIdentifier, "input {raw:?}");
        }
    }

    #[test]
    fn test_deserialize_validates_range() {
        let ok: Coach = serde_json::from_str(
            r#"{"id": 4, "name": "Joachim Low", "country_name": "Germany", "image_url": ""}"#,
        )
        .unwrap();
        assert_eq!(ok.id.value(), 4);

        let bad = serde_json::from_str::<Coach>(
            r#"{"id": 40, "name": "Nobody", "country_name": "Nowhere"}"#,
        );
        assert!(bad.is_err());
    }
}
