//! Filter and sort engine for the roster table.
//!
//! [`query`] is a pure function over a borrowed roster snapshot: it never
//! mutates the records, never invents rows, and its output depends only on
//! its three inputs.
//!
//! # Filtering
//!
//! A record is kept when the lowercased search term is a substring of the
//! lowercased `name`, `role` or `status`. `last_login` is not searched and
//! the term is not trimmed.
//!
//! # Sorting
//!
//! With no key the filtered rows keep their input order. With a key, rows are
//! ordered by lexical comparison of that field using a stable sort, so rows
//! with equal values keep their input order in both directions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::entities::Record;

/// Column a roster can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Role,
    Status,
    LastLogin,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Status => "status",
            Self::LastLogin => "lastLogin",
        }
    }

    /// String value of this column for `record`.
    pub fn value_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Self::Name => &record.name,
            Self::Role => &record.role,
            Self::Status => record.status.as_str(),
            Self::LastLogin => &record.last_login,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Applies the direction to an ascending three-way comparison.
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a sort key or direction string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSortError {
    #[error("Unknown sort key '{0}'")]
    Key(String),
    #[error("Unknown sort direction '{0}'")]
    Direction(String),
}

impl FromStr for SortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "role" => Ok(Self::Role),
            "status" => Ok(Self::Status),
            "lastLogin" | "last_login" => Ok(Self::LastLogin),
            other => Err(ParseSortError::Key(other.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseSortError::Direction(other.to_string())),
        }
    }
}

/// Active sort column and direction. The default sorts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortDirective {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Next directive after a "sort by `key`" request.
    ///
    /// Flips to descending only when `key` is already sorted ascending;
    /// every other state resets to `{key, asc}`.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = match self {
            Self {
                key: Some(current),
                direction: SortDirection::Asc,
            } if current == key => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Self::new(key, direction)
    }

    /// Direction to show on the header for `key`, if it is the active column.
    pub fn indicator_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

/// Returns whether `record` matches an already-lowercased search term.
fn matches_term(record: &Record, needle: &str) -> bool {
    [
        record.name.as_str(),
        record.role.as_str(),
        record.status.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filters and orders `records` for display.
pub fn query<'a>(records: &'a [Record], term: &str, sort: SortDirective) -> Vec<&'a Record> {
    let needle = term.to_lowercase();
    let mut rows: Vec<&Record> = records
        .iter()
        .filter(|record| needle.is_empty() || matches_term(record, &needle))
        .collect();

    if let Some(key) = sort.key {
        // `sort_by` is stable, so ties keep input order for both directions.
        rows.sort_by(|a, b| sort.direction.apply(key.value_of(a).cmp(key.value_of(b))));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DashboardConfig, Status};

    fn bob_and_amy() -> Vec<Record> {
        vec![
            Record::new("Bob", "QA", Status::Online, "now"),
            Record::new("Amy", "QA", Status::Offline, "1m"),
        ]
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let records = bob_and_amy();
        let rows = query(&records, "", SortDirective::new(SortKey::Name, SortDirection::Asc));
        assert_eq!(names(&rows), vec!["Amy", "Bob"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_role() {
        let records = bob_and_amy();
        let rows = query(&records, "qa", SortDirective::default());
        assert_eq!(names(&rows), vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let records = bob_and_amy();
        assert!(query(&records, "zzz", SortDirective::default()).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let rows = query(&[], "", SortDirective::new(SortKey::Role, SortDirection::Desc));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_status_text_is_searchable() {
        let records = bob_and_amy();
        let rows = query(&records, "OFF", SortDirective::default());
        assert_eq!(names(&rows), vec!["Amy"]);
    }

    #[test]
    fn test_last_login_is_not_searched() {
        let records = bob_and_amy();
        assert!(query(&records, "1m", SortDirective::default()).is_empty());
    }

    #[test]
    fn test_term_is_not_trimmed() {
        let records = bob_and_amy();
        assert!(query(&records, " bob", SortDirective::default()).is_empty());
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let records = DashboardConfig::default().roster;
        let rows = query(&records, "", SortDirective::default());
        let expected: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names(&rows), expected);
    }

    #[test]
    fn test_result_is_subsequence_of_input() {
        let records = DashboardConfig::default().roster;
        for term in ["", "e", "engineer", "online", "zzz"] {
            for key in [SortKey::Name, SortKey::Role, SortKey::Status, SortKey::LastLogin] {
                for direction in [SortDirection::Asc, SortDirection::Desc] {
                    let rows = query(&records, term, SortDirective::new(key, direction));
                    assert!(rows.len() <= records.len());
                    let unsorted = query(&records, term, SortDirective::default());
                    assert_eq!(rows.len(), unsorted.len());
                    for row in &rows {
                        assert!(unsorted.iter().any(|r| std::ptr::eq(*r, *row)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_query_is_idempotent() {
        let records = DashboardConfig::default().roster;
        let sort = SortDirective::new(SortKey::Status, SortDirection::Desc);
        assert_eq!(query(&records, "er", sort), query(&records, "er", sort));
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let records = DashboardConfig::default().roster;

        let asc = query(&records, "", SortDirective::new(SortKey::Role, SortDirection::Asc));
        let engineers: Vec<String> = asc
            .iter()
            .filter(|r| r.role == "Software Engineer")
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(engineers, vec!["Elaine", "Mohit", "Shreya", "Akshita"]);

        let desc = query(&records, "", SortDirective::new(SortKey::Role, SortDirection::Desc));
        let engineers: Vec<String> = desc
            .iter()
            .filter(|r| r.role == "Software Engineer")
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(engineers, vec!["Elaine", "Mohit", "Shreya", "Akshita"]);
        assert_eq!(desc[0].role, "Tester");
    }

    #[test]
    fn test_last_login_sorts_lexically() {
        let records = DashboardConfig::default().roster;
        let rows = query(
            &records,
            "",
            SortDirective::new(SortKey::LastLogin, SortDirection::Asc),
        );
        assert_eq!(rows[0].last_login, "1 min ago");
        assert_eq!(rows[1].last_login, "10 mins ago");
        assert_eq!(rows.last().unwrap().last_login, "Yesterday");
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let records = bob_and_amy();
        let before = records.clone();
        let _ = query(&records, "", SortDirective::new(SortKey::Name, SortDirection::Asc));
        assert_eq!(records, before);
    }

    #[test]
    fn test_toggle_law() {
        let start = SortDirective::new(SortKey::Name, SortDirection::Asc);

        let second = start.toggle(SortKey::Name);
        assert_eq!(second, SortDirective::new(SortKey::Name, SortDirection::Desc));

        let third = second.toggle(SortKey::Name);
        assert_eq!(third, SortDirective::new(SortKey::Name, SortDirection::Asc));

        for prior in [start, second, SortDirective::default()] {
            assert_eq!(
                prior.toggle(SortKey::Role),
                SortDirective::new(SortKey::Role, SortDirection::Asc)
            );
        }
    }

    #[test]
    fn test_toggle_from_unsorted() {
        assert_eq!(
            SortDirective::default().toggle(SortKey::Status),
            SortDirective::new(SortKey::Status, SortDirection::Asc)
        );
    }

    #[test]
    fn test_indicator_for_active_column_only() {
        let sort = SortDirective::new(SortKey::Status, SortDirection::Desc);
        assert_eq!(sort.indicator_for(SortKey::Status), Some(SortDirection::Desc));
        assert_eq!(sort.indicator_for(SortKey::Name), None);
    }

    #[test]
    fn test_parse_sort_key_and_direction() {
        assert_eq!("lastLogin".parse::<SortKey>(), Ok(SortKey::LastLogin));
        assert_eq!("last_login".parse::<SortKey>(), Ok(SortKey::LastLogin));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!(matches!(
            "semester".parse::<SortKey>(),
            Err(ParseSortError::Key(_))
        ));
        assert!(matches!(
            "up".parse::<SortDirection>(),
            Err(ParseSortError::Direction(_))
        ));
    }
}
