//! # Attendance Dashboard
//!
//! A server-rendered student attendance dashboard built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Roster records, the filter/sort engine and the summary state machine
//! - **Application Layer** ([`application`]) - Roster and summary services
//! - **Infrastructure Layer** ([`infrastructure`]) - Attendance sources (HTTP, roster-derived)
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML dashboard
//!
//! ## Features
//!
//! - Case-insensitive roster search over name, role and status
//! - Stable, toggleable column sorting
//! - Present/absent cards backed by one attendance fetch per activation
//! - Dashboard content supplied as configuration
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: read today's counts from another service
//! export ATTENDANCE_URL="http://localhost:4000/api/attendance/today"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RosterService, SummaryService};
    pub use crate::domain::entities::{DashboardConfig, Record, Status};
    pub use crate::domain::roster_query::{SortDirection, SortDirective, SortKey, query};
    pub use crate::domain::summary::{AttendanceCounts, FetchFailure, SummaryState};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
