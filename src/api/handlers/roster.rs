//! Handler for the roster table.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::roster::{RosterQueryParams, RosterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the filtered and sorted roster.
///
/// # Endpoint
///
/// `GET /api/roster`
///
/// # Query Parameters
///
/// - `q` (optional): Case-insensitive search over name, role and status
/// - `sort` (optional): `name`, `role`, `status` or `lastLogin`
/// - `dir` (optional): `asc` (default) or `desc`
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown sort key or direction, or a
/// search term longer than 200 characters. An empty result is not an error.
pub async fn roster_handler(
    State(state): State<AppState>,
    Query(params): Query<RosterQueryParams>,
) -> Result<Json<RosterResponse>, AppError> {
    params.validate()?;
    let sort = params.directive()?;

    let items: Vec<_> = state
        .roster_service
        .query(&params.q, sort)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(RosterResponse {
        query: params.q,
        sort,
        total: state.roster_service.len(),
        matched: items.len(),
        items,
    }))
}
