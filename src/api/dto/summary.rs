//! DTOs for the attendance summary endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::summary::SummaryState;

/// Current summary state plus the source it is read from.
///
/// Flattens the state, so a ready summary serializes as
/// `{"state": "ready", "presentCount": 5, "absentCount": 2, "source": "..."}`.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: SummaryState,
    pub source: String,
    #[serde(rename = "settledAt", skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
}
