//! Today's attendance summary service.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::repositories::AttendanceSource;
use crate::domain::summary::{AttendanceSummary, SummaryState};
use crate::error::AppError;

/// Owns the summary state machine and performs the attendance fetch.
///
/// At most one request is outstanding at any time. Failures are logged and
/// folded into the `Error` state; they are never returned to callers.
pub struct SummaryService {
    source: Arc<dyn AttendanceSource>,
    summary: RwLock<AttendanceSummary>,
    settled_at: RwLock<Option<DateTime<Utc>>>,
    in_flight: Mutex<()>,
}

impl SummaryService {
    /// Creates a service in the `Loading` state. Nothing is fetched until
    /// [`SummaryService::refresh`] is called.
    pub fn new(source: Arc<dyn AttendanceSource>) -> Self {
        Self {
            source,
            summary: RwLock::new(AttendanceSummary::new()),
            settled_at: RwLock::new(None),
            in_flight: Mutex::new(()),
        }
    }

    /// Current presentation state.
    pub fn state(&self) -> SummaryState {
        self.read().state().clone()
    }

    /// Every state entered so far, oldest first.
    pub fn transitions(&self) -> Vec<SummaryState> {
        self.read().transitions().to_vec()
    }

    /// When the last fetch settled, successful or not. `None` before the
    /// first fetch completes.
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        *self.settled_at.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Runs one activation: enters `Loading` (if not already there), fetches
    /// once and settles into `Ready` or `Error`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another refresh is still in flight.
    /// Fetch failures are not errors here; they produce the `Error` state.
    pub async fn refresh(&self) -> Result<SummaryState, AppError> {
        let _guard = self.in_flight.try_lock().map_err(|_| {
            AppError::conflict("Attendance refresh already in progress", json!({}))
        })?;

        if self.write().retry() {
            tracing::debug!("Attendance summary re-entered loading");
        }

        let outcome = self.source.fetch_today().await;

        match &outcome {
            Ok(counts) => {
                metrics::counter!("attendance_fetch_total", "outcome" => "ok").increment(1);
                tracing::info!(
                    present = counts.present_count,
                    absent = counts.absent_count,
                    "Attendance counts loaded"
                );
            }
            Err(e) => {
                metrics::counter!("attendance_fetch_total", "outcome" => "error").increment(1);
                tracing::warn!(error = %e, source = %self.source.describe(), "Attendance fetch failed");
            }
        }

        let mut summary = self.write();
        summary.resolve(outcome);
        *self.settled_at.write().unwrap_or_else(|e| e.into_inner()) = Some(Utc::now());
        Ok(summary.state().clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, AttendanceSummary> {
        self.summary.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AttendanceSummary> {
        self.summary.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAttendanceSource;
    use crate::domain::summary::{AttendanceCounts, FETCH_FAILURE_MESSAGE, FetchFailure};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn mock_returning(
        outcome: Result<AttendanceCounts, FetchFailure>,
        times: usize,
    ) -> MockAttendanceSource {
        let mut mock = MockAttendanceSource::new();
        mock.expect_fetch_today()
            .times(times)
            .returning(move || outcome.clone());
        mock.expect_describe()
            .returning(|| "mock".to_string());
        mock
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let service = SummaryService::new(Arc::new(mock_returning(
            Ok(AttendanceCounts::new(5, 2)),
            1,
        )));
        assert_eq!(service.state(), SummaryState::Loading);
        assert!(service.settled_at().is_none());

        let state = service.refresh().await.unwrap();

        assert_eq!(state, SummaryState::Ready { present: 5, absent: 2 });
        assert!(service.settled_at().is_some());
        assert_eq!(
            service.transitions(),
            vec![SummaryState::Loading, SummaryState::Ready { present: 5, absent: 2 }]
        );
    }

    #[tokio::test]
    async fn test_refresh_failure() {
        let service = SummaryService::new(Arc::new(mock_returning(
            Err(FetchFailure::Status(500)),
            1,
        )));

        let state = service.refresh().await.unwrap();

        assert_eq!(
            state,
            SummaryState::Error {
                message: FETCH_FAILURE_MESSAGE.to_string()
            }
        );
        assert_eq!(
            service.transitions(),
            vec![SummaryState::Loading, SummaryState::failed()]
        );
    }

    #[tokio::test]
    async fn test_retry_after_failure_reenters_loading() {
        let mut mock = MockAttendanceSource::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_fetch_today()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(FetchFailure::Transport("refused".to_string())));
        mock.expect_fetch_today()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(AttendanceCounts::new(8, 1)));
        mock.expect_describe().returning(|| "mock".to_string());

        let service = SummaryService::new(Arc::new(mock));
        service.refresh().await.unwrap();
        service.refresh().await.unwrap();

        let names: Vec<&str> = service.transitions().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["loading", "error", "loading", "ready"]);
        assert_eq!(service.state(), SummaryState::Ready { present: 8, absent: 1 });
    }

    #[tokio::test]
    async fn test_no_fetch_until_refresh() {
        let service = SummaryService::new(Arc::new(mock_returning(
            Ok(AttendanceCounts::new(1, 1)),
            0,
        )));

        assert_eq!(service.state(), SummaryState::Loading);
        assert_eq!(service.source_description(), "mock");
    }

    /// Source that blocks until released, to hold a request in flight.
    struct GatedSource {
        gate: Notify,
    }

    #[async_trait]
    impl AttendanceSource for GatedSource {
        async fn fetch_today(&self) -> Result<AttendanceCounts, FetchFailure> {
            self.gate.notified().await;
            Ok(AttendanceCounts::new(3, 4))
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    #[tokio::test]
    async fn test_overlapping_refresh_is_rejected() {
        let source = Arc::new(GatedSource {
            gate: Notify::new(),
        });
        let service = SummaryService::new(source.clone());

        let (first, second, _) = tokio::join!(service.refresh(), service.refresh(), async {
            source.gate.notify_one();
        });

        assert_eq!(first.unwrap(), SummaryState::Ready { present: 3, absent: 4 });
        assert!(matches!(second, Err(AppError::Conflict { .. })));
        assert_eq!(service.transitions().len(), 2);
    }
}
