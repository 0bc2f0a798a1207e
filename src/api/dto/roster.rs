//! DTOs for the roster table endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::Record;
use crate::domain::roster_query::{ParseSortError, SortDirection, SortDirective, SortKey};

/// Search and sort query parameters shared by `/api/roster` and `/dashboard`.
///
/// Empty `sort`/`dir` values (as submitted by an HTML form) count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RosterQueryParams {
    #[serde(default)]
    #[validate(length(max = 200, message = "Search term is too long"))]
    pub q: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sort: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub dir: Option<String>,
}

impl RosterQueryParams {
    /// Parses `sort` and `dir` into a directive.
    ///
    /// A direction without a key is accepted and kept, so the directive
    /// remains `{none, dir}`.
    pub fn directive(&self) -> Result<SortDirective, ParseSortError> {
        let key = self
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?;
        let direction = self
            .dir
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();

        Ok(SortDirective { key, direction })
    }
}

/// Filtered and sorted roster rows.
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub query: String,
    pub sort: SortDirective,
    /// Size of the unfiltered roster.
    pub total: usize,
    pub matched: usize,
    pub items: Vec<Record>,
}
