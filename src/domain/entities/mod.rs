//! Core domain entities representing the dashboard data model.
//!
//! Entities are plain data structures. The only behaviour they carry is
//! display mapping and configuration validation.
//!
//! # Entity Types
//!
//! - [`Record`] - One roster row (name, role, status, last login)
//! - [`Status`] - Online / Offline presence
//! - [`DashboardConfig`] - Menu, roster, stat cards and chart data

pub mod dashboard;
pub mod record;

pub use dashboard::{ChartSeries, DashboardConfig, StatCard, StatKind, Trend, TrendDirection};
pub use record::{Record, Status};
