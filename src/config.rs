//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export ATTENDANCE_URL="https://attendance.example.edu/api/attendance/today"
//! export DASHBOARD_CONFIG="./dashboard.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ATTENDANCE_URL` - Remote source for today's counts. When unset, counts
//!   are derived from the roster.
//! - `ATTENDANCE_TIMEOUT_SECS` - Request timeout for the remote source
//!   (default: 10, range: 1-300)
//! - `DASHBOARD_CONFIG` - Path to a JSON [`DashboardConfig`] file. When unset,
//!   the built-in sample dashboard is used.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::domain::entities::DashboardConfig;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Remote attendance endpoint. `None` selects the roster-derived source.
    pub attendance_url: Option<String>,
    pub attendance_timeout_secs: u64,
    pub dashboard_config_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ATTENDANCE_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let attendance_url = env::var("ATTENDANCE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let attendance_timeout_secs = match env::var("ATTENDANCE_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("ATTENDANCE_TIMEOUT_SECS must be a number, got '{v}'"))?,
            Err(_) => 10,
        };

        let dashboard_config_path = env::var("DASHBOARD_CONFIG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            attendance_url,
            attendance_timeout_secs,
            dashboard_config_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `attendance_url` is not an absolute `http`/`https` URL
    /// - `attendance_timeout_secs` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref raw) = self.attendance_url {
            let parsed = url::Url::parse(raw)
                .with_context(|| format!("ATTENDANCE_URL is not a valid URL: '{raw}'"))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!(
                    "ATTENDANCE_URL must start with 'http://' or 'https://', got '{}'",
                    raw
                );
            }
        }

        if !(1..=300).contains(&self.attendance_timeout_secs) {
            anyhow::bail!(
                "ATTENDANCE_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.attendance_timeout_secs
            );
        }

        Ok(())
    }

    /// Returns whether today's counts come from a remote service.
    pub fn is_remote_attendance(&self) -> bool {
        self.attendance_url.is_some()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.attendance_url {
            Some(url) => tracing::info!(
                "  Attendance source: {} (timeout {}s)",
                url,
                self.attendance_timeout_secs
            ),
            None => tracing::info!("  Attendance source: roster"),
        }

        match &self.dashboard_config_path {
            Some(path) => tracing::info!("  Dashboard config: {}", path.display()),
            None => tracing::info!("  Dashboard config: built-in"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Loads the dashboard definition from `path`, or the built-in one when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or fails
/// [`DashboardConfig`] validation.
pub fn load_dashboard(path: Option<&Path>) -> Result<DashboardConfig> {
    let dashboard = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dashboard config {}", path.display()))?;
            serde_json::from_str::<DashboardConfig>(&raw)
                .with_context(|| format!("Invalid dashboard config {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };

    dashboard
        .validate()
        .context("Dashboard config failed validation")?;

    Ok(dashboard)
}
