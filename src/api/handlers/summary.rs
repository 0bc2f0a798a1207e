//! Handlers for today's attendance summary.

use axum::{Json, extract::State};

use crate::api::dto::summary::SummaryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current summary state without fetching.
///
/// # Endpoint
///
/// `GET /api/summary`
pub async fn summary_handler(State(state): State<AppState>) -> Json<SummaryResponse> {
    let service = &state.summary_service;
    Json(SummaryResponse {
        summary: service.state(),
        source: service.source_description(),
        settled_at: service.settled_at(),
    })
}

/// Retries the attendance fetch and returns the settled state.
///
/// # Endpoint
///
/// `POST /api/summary/refresh`
///
/// # Errors
///
/// Returns 409 Conflict if a refresh is already in flight. A failed fetch is
/// not an error: it yields `{"state": "error", ...}` with status 200.
pub async fn refresh_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let service = &state.summary_service;
    let summary = service.refresh().await?;

    Ok(Json(SummaryResponse {
        summary,
        source: service.source_description(),
        settled_at: service.settled_at(),
    }))
}
