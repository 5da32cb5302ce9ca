// ABOUTME: Core data models for the coach roster API
// ABOUTME: Re-exports the Coach entity and request-scoped list query types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Coach entity and its validated identifier
pub mod coach;

/// Request-scoped list query and its filter precedence
pub mod list_query;

pub use coach::{Coach, CoachId};
pub use list_query::{ListFilter, ListQuery};
