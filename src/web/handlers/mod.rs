//! HTML template rendering handlers for the web dashboard.

mod dashboard;

pub use dashboard::{DashboardTemplate, dashboard_handler, refresh_handler};
