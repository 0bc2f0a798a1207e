//! API route configuration.

use crate::api::handlers::{
    attendance_today_handler, refresh_summary_handler, roster_handler, summary_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /roster`              - Filtered and sorted roster rows
/// - `GET  /summary`             - Current attendance summary state
/// - `POST /summary/refresh`     - Retry the attendance fetch
/// - `GET  /attendance/today`    - Roster-derived present/absent counts
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/roster", get(roster_handler))
        .route("/summary", get(summary_handler))
        .route("/summary/refresh", post(refresh_summary_handler))
        .route("/attendance/today", get(attendance_today_handler))
}
