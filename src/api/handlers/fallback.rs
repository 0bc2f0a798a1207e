//! Fallback for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any unknown path with a JSON 404.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("No route for this path", json!({ "path": uri.path() }))
}
