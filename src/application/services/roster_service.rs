//! Roster snapshot and table queries.

use std::sync::Arc;

use crate::domain::entities::Record;
use crate::domain::roster_query::{self, SortDirective};

/// Holds the immutable roster snapshot and answers table queries against it.
pub struct RosterService {
    roster: Arc<[Record]>,
}

impl RosterService {
    /// Creates a new roster service over `roster`.
    pub fn new(roster: Arc<[Record]>) -> Self {
        Self { roster }
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Rows to display for `term` and `sort`.
    ///
    /// See [`roster_query::query`] for the filtering and ordering rules.
    pub fn query(&self, term: &str, sort: SortDirective) -> Vec<&Record> {
        let rows = roster_query::query(&self.roster, term, sort);

        metrics::counter!("roster_queries_total").increment(1);
        tracing::debug!(
            term,
            sort_key = sort.key.map(|k| k.as_str()),
            direction = %sort.direction,
            matched = rows.len(),
            total = self.roster.len(),
            "Roster query"
        );

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DashboardConfig;
    use crate::domain::roster_query::{SortDirection, SortKey};

    fn service() -> RosterService {
        RosterService::new(DashboardConfig::default().roster.into())
    }

    #[test]
    fn test_query_filters_and_sorts() {
        let service = service();

        let rows = service.query(
            "software",
            SortDirective::new(SortKey::Name, SortDirection::Desc),
        );

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Shreya", "Mohit", "Elaine", "Akshita"]);
    }

    #[test]
    fn test_query_leaves_snapshot_untouched() {
        let roster: Arc<[Record]> = DashboardConfig::default().roster.into();
        let before = roster.to_vec();
        let service = RosterService::new(Arc::clone(&roster));

        let _ = service.query("", SortDirective::new(SortKey::Status, SortDirection::Asc));

        assert_eq!(roster.to_vec(), before);
        assert_eq!(service.len(), 10);
        assert!(!service.is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let service = RosterService::new(Vec::<Record>::new().into());
        assert!(service.is_empty());
        assert!(service.query("", SortDirective::default()).is_empty());
    }
}
