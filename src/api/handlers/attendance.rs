//! Handler exposing roster-derived attendance counts.

use axum::{Json, extract::State};

use crate::domain::summary::AttendanceCounts;
use crate::state::AppState;

/// Returns today's counts computed from the roster.
///
/// # Endpoint
///
/// `GET /api/attendance/today`
///
/// # Response
///
/// ```json
/// { "presentCount": 6, "absentCount": 4 }
/// ```
///
/// The payload shape matches what [`crate::infrastructure::attendance::HttpAttendanceSource`]
/// expects, so one instance can serve as the attendance source of another.
pub async fn attendance_today_handler(State(state): State<AppState>) -> Json<AttendanceCounts> {
    Json(state.roster_attendance.counts())
}
