//! Presentation state for today's attendance counts.
//!
//! The summary is a three-state machine:
//!
//! ```text
//! Loading ──success──▶ Ready(present, absent)
//!    │
//!    └──failure──▶ Error("Failed to fetch attendance data.")
//!
//! Ready | Error ──retry──▶ Loading
//! ```
//!
//! Failures never escape the machine: [`AttendanceSummary::resolve`] turns any
//! [`FetchFailure`] into the fixed [`FETCH_FAILURE_MESSAGE`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown in place of a statistic when the fetch fails.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch attendance data.";

/// Today's counts as returned by an attendance source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCounts {
    pub present_count: u32,
    pub absent_count: u32,
}

impl AttendanceCounts {
    pub fn new(present_count: u32, absent_count: u32) -> Self {
        Self {
            present_count,
            absent_count,
        }
    }
}

/// The single error kind of the summary request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("attendance request failed: {0}")]
    Transport(String),
    #[error("attendance source returned status {0}")]
    Status(u16),
    #[error("malformed attendance payload: {0}")]
    Payload(String),
}

/// What the stat cards currently display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SummaryState {
    Loading,
    Error {
        message: String,
    },
    Ready {
        #[serde(rename = "presentCount")]
        present: u32,
        #[serde(rename = "absentCount")]
        absent: u32,
    },
}

impl SummaryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(counts: AttendanceCounts) -> Self {
        Self::Ready {
            present: counts.present_count,
            absent: counts.absent_count,
        }
    }

    pub fn failed() -> Self {
        Self::Error {
            message: FETCH_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Short name of the state, as used in logs and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::Ready { .. } => "ready",
        }
    }
}

/// Summary state machine with an ordered record of every state it entered.
#[derive(Debug, Clone)]
pub struct AttendanceSummary {
    state: SummaryState,
    transitions: Vec<SummaryState>,
}

impl AttendanceSummary {
    /// Starts in `Loading`.
    pub fn new() -> Self {
        Self {
            state: SummaryState::Loading,
            transitions: vec![SummaryState::Loading],
        }
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    /// Every state entered so far, oldest first.
    pub fn transitions(&self) -> &[SummaryState] {
        &self.transitions
    }

    /// Re-enters `Loading` for an explicit retry.
    ///
    /// Returns `false` and changes nothing if a fetch is already pending.
    pub fn retry(&mut self) -> bool {
        if self.state.is_loading() {
            return false;
        }
        self.enter(SummaryState::Loading);
        true
    }

    /// Settles a pending fetch.
    ///
    /// Returns `false` and changes nothing when not in `Loading`, so a late
    /// outcome can never overwrite a settled state.
    pub fn resolve(&mut self, outcome: Result<AttendanceCounts, FetchFailure>) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        let next = match outcome {
            Ok(counts) => SummaryState::ready(counts),
            Err(_) => SummaryState::failed(),
        };
        self.enter(next);
        true
    }

    fn enter(&mut self, state: SummaryState) {
        self.transitions.push(state.clone());
        self.state = state;
    }
}

impl Default for AttendanceSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_sequence() {
        let mut summary = AttendanceSummary::new();
        assert!(summary.resolve(Err(FetchFailure::Status(500))));

        assert_eq!(
            summary.transitions(),
            &[
                SummaryState::Loading,
                SummaryState::Error {
                    message: "Failed to fetch attendance data.".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_success_sequence() {
        let mut summary = AttendanceSummary::new();
        assert!(summary.resolve(Ok(AttendanceCounts::new(5, 2))));

        assert_eq!(
            summary.transitions(),
            &[
                SummaryState::Loading,
                SummaryState::Ready {
                    present: 5,
                    absent: 2
                }
            ]
        );
    }

    #[test]
    fn test_failure_detail_is_not_surfaced() {
        let mut summary = AttendanceSummary::new();
        summary.resolve(Err(FetchFailure::Transport("connection refused".to_string())));

        match summary.state() {
            SummaryState::Error { message } => assert_eq!(message, FETCH_FAILURE_MESSAGE),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_resolve_outside_loading_is_ignored() {
        let mut summary = AttendanceSummary::new();
        summary.resolve(Ok(AttendanceCounts::new(1, 1)));

        assert!(!summary.resolve(Err(FetchFailure::Status(503))));
        assert_eq!(summary.state(), &SummaryState::Ready { present: 1, absent: 1 });
        assert_eq!(summary.transitions().len(), 2);
    }

    #[test]
    fn test_retry_reenters_loading() {
        let mut summary = AttendanceSummary::new();
        assert!(!summary.retry());

        summary.resolve(Err(FetchFailure::Status(502)));
        assert!(summary.retry());
        summary.resolve(Ok(AttendanceCounts::new(7, 3)));

        let names: Vec<&str> = summary.transitions().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["loading", "error", "loading", "ready"]);
    }

    #[test]
    fn test_state_json_shape() {
        let ready = serde_json::to_value(SummaryState::ready(AttendanceCounts::new(5, 2))).unwrap();
        assert_eq!(ready["state"], "ready");
        assert_eq!(ready["presentCount"], 5);
        assert_eq!(ready["absentCount"], 2);

        let error = serde_json::to_value(SummaryState::failed()).unwrap();
        assert_eq!(error["state"], "error");
        assert_eq!(error["message"], FETCH_FAILURE_MESSAGE);

        let loading = serde_json::to_value(SummaryState::Loading).unwrap();
        assert_eq!(loading, serde_json::json!({ "state": "loading" }));
    }

    #[test]
    fn test_counts_payload_shape() {
        let counts: AttendanceCounts =
            serde_json::from_str(r#"{"presentCount": 5, "absentCount": 2}"#).unwrap();
        assert_eq!(counts, AttendanceCounts::new(5, 2));
    }
}
