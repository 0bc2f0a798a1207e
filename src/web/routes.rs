//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, refresh_handler};
use axum::{Router, routing::get};

/// Dashboard routes, nested under `/dashboard`.
///
/// # Endpoints
///
/// - `GET /` - Dashboard page with roster table
/// - `GET /refresh` - Retry the attendance fetch and redirect back
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/refresh", get(refresh_handler))
}
