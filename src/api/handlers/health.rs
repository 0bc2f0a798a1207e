//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::summary::SummaryState;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Roster loaded and the attendance summary is not in error
/// - **503 Service Unavailable**: The last attendance fetch failed
///
/// A summary still loading is reported as `pending` and counts as healthy.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let roster_check = check_roster(&state);
    let attendance_check = check_attendance(&state);

    let all_healthy = roster_check.status == "ok" && attendance_check.status != "error";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            roster: roster_check,
            attendance: attendance_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_roster(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} records", state.roster_service.len())),
    }
}

/// Reports the last settled summary state together with its source.
fn check_attendance(state: &AppState) -> CheckStatus {
    let source = state.summary_service.source_description();
    match state.summary_service.state() {
        SummaryState::Ready { .. } => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Source: {}", source)),
        },
        SummaryState::Loading => CheckStatus {
            status: "pending".to_string(),
            message: Some(format!("Fetching from {}", source)),
        },
        SummaryState::Error { .. } => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Last fetch from {} failed", source)),
        },
    }
}
