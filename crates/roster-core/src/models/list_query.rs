// ABOUTME: Query-string parameters for listing coaches and their filter precedence
// ABOUTME: ListFilter resolves search > all_list > country > empty as one explicit ordered match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::coaches::RETURN_ALL_LIST;
use serde::Deserialize;

/// Query parameters accepted by `GET /coaches`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    /// Substring to look for in coach names
    pub search: Option<String>,
    /// Return mode; `all_list` requests the unfiltered roster
    #[serde(rename = "return")]
    pub return_mode: Option<String>,
    /// Substring to look for in country names
    pub country: Option<String>,
}

/// The single read a list request resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Name contains the term
    Search(String),
    /// Every stored coach
    AllList,
    /// Country contains the term
    Country(String),
    /// No usable parameter; the result is empty and storage is not touched
    Empty,
}

impl ListFilter {
    /// Resolve a query into exactly one filter
    ///
    /// | priority | condition                  | filter    |
    /// |----------|----------------------------|-----------|
    /// | 1        | `search` non-empty         | `Search`  |
    /// | 2        | `return == "all_list"`     | `AllList` |
    /// | 3        | `country` non-empty        | `Country` |
    /// | 4        | otherwise                  | `Empty`   |
    #[must_use]
    pub fn from_query(query: &ListQuery) -> Self {
        let search = non_empty(query.search.as_deref());
        let all_list = query.return_mode.as_deref() == Some(RETURN_ALL_LIST);
        let country = non_empty(query.country.as_deref());

        match (search, all_list, country) {
            (Some(term), _, _) => Self::Search(term.to_owned()),
            (None, true, _) => Self::AllList,
            (None, false, Some(term)) => Self::Country(term.to_owned()),
            (None, false, None) => Self::Empty,
        }
    }

    /// Short label for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::AllList => "all_list",
            Self::Country(_) => "country",
            Self::Empty => "empty",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: Option<&str>, return_mode: Option<&str>, country: Option<&str>) -> ListQuery {
        ListQuery {
            search: search.map(str::to_owned),
            return_mode: return_mode.map(str::to_owned),
            country: country.map(str::to_owned),
        }
    }

    #[test]
    fn test_search_wins_over_everything() {
        let filter = ListFilter::from_query(&query(Some("smith"), Some("all_list"), Some("Spain")));
        assert_eq!(filter, ListFilter::Search("smith".to_owned()));
    }

    #[test]
    fn test_all_list_wins_over_country() {
        let filter = ListFilter::from_query(&query(None, Some("all_list"), Some("Spain")));
        assert_eq!(filter, ListFilter::AllList);
    }

    #[test]
    fn test_country_when_alone() {
        let filter = ListFilter::from_query(&query(None, None, Some("Spain")));
        assert_eq!(filter, ListFilter::Country("Spain".to_owned()));
    }

    #[test]
    fn test_nothing_set_is_empty() {
        assert_eq!(ListFilter::from_query(&ListQuery::default()), ListFilter::Empty);
    }

    #[test]
    fn test_empty_strings_do_not_count() {
        let filter = ListFilter::from_query(&query(Some(""), Some(""), Some("")));
        assert_eq!(filter, ListFilter::Empty);

        let filter = ListFilter::from_query(&query(Some(""), None, Some("Brazil")));
        assert_eq!(filter, ListFilter::Country("Brazil".to_owned()));
    }

    #[test]
    fn test_unknown_return_mode_is_ignored() {
        let filter = ListFilter::from_query(&query(None, Some("everything"), None));
        assert_eq!(filter, ListFilter::Empty);

        let filter = ListFilter::from_query(&query(None, Some("ALL_LIST"), Some("Peru")));
        assert_eq!(filter, ListFilter::Country("Peru".to_owned()));
    }
}
