//! HTTP server initialization and runtime setup.
//!
//! Handles dashboard loading, attendance source selection, the initial
//! summary activation, and Axum server lifecycle.

use crate::config::{self, Config};
use crate::domain::entities::Record;
use crate::domain::repositories::AttendanceSource;
use crate::infrastructure::attendance::{HttpAttendanceSource, RosterAttendanceSource};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Dashboard definition (file or built-in)
/// - Attendance source (remote HTTP or roster-derived)
/// - First summary activation in the background
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The dashboard config cannot be loaded or is invalid
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let dashboard = config::load_dashboard(config.dashboard_config_path.as_deref())?;
    tracing::info!(records = dashboard.roster.len(), "Dashboard loaded");

    let source = build_source(&config, &dashboard.roster)?;
    tracing::info!(
        remote = config.is_remote_attendance(),
        "Attendance source: {}",
        source.describe()
    );

    let state = AppState::new(dashboard, source);

    let summary = Arc::clone(&state.summary_service);
    tokio::spawn(async move {
        if let Err(e) = summary.refresh().await {
            tracing::warn!(error = %e, "Initial attendance fetch skipped");
        }
    });

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}/dashboard");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the remote source when `ATTENDANCE_URL` is set, otherwise counts the roster.
pub fn build_source(config: &Config, roster: &[Record]) -> Result<Arc<dyn AttendanceSource>> {
    match &config.attendance_url {
        Some(url) => {
            let source = HttpAttendanceSource::new(
                url.clone(),
                Duration::from_secs(config.attendance_timeout_secs),
            )
            .context("Failed to create attendance client")?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(RosterAttendanceSource::new(roster.to_vec().into()))),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Status;

    fn config(attendance_url: Option<&str>) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            attendance_url: attendance_url.map(String::from),
            attendance_timeout_secs: 5,
            dashboard_config_path: None,
        }
    }

    #[test]
    fn test_build_source_defaults_to_roster() {
        let roster = [
            Record::new("Bob", "QA", Status::Online, "now"),
            Record::new("Amy", "QA", Status::Offline, "1m"),
        ];

        let source = build_source(&config(None), &roster).unwrap();

        assert_eq!(source.describe(), "roster (2 records)");
    }

    #[test]
    fn test_build_source_uses_remote_url() {
        let url = "http://127.0.0.1:4000/api/attendance/today";

        let source = build_source(&config(Some(url)), &[]).unwrap();

        assert_eq!(source.describe(), format!("remote ({url})"));
    }
}
