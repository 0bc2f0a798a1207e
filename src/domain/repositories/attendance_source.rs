//! Repository trait for today's attendance counts.

use crate::domain::summary::{AttendanceCounts, FetchFailure};
use async_trait::async_trait;

/// Source of today's present/absent counts.
///
/// # Implementations
///
/// - [`crate::infrastructure::attendance::HttpAttendanceSource`] - Remote `GET /api/attendance/today`
/// - [`crate::infrastructure::attendance::RosterAttendanceSource`] - Derived from the roster snapshot
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceSource: Send + Sync {
    /// Fetches today's counts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchFailure`] on transport errors, non-success statuses or
    /// malformed payloads.
    async fn fetch_today(&self) -> Result<AttendanceCounts, FetchFailure>;

    /// Human-readable description for health checks and startup logs.
    fn describe(&self) -> String;
}
