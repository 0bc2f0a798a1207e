//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod attendance;
pub mod fallback;
pub mod health;
pub mod roster;
pub mod summary;

pub use attendance::attendance_today_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use roster::roster_handler;
pub use summary::{refresh_summary_handler, summary_handler};
