//! Attendance sources for the summary cards.
//!
//! Provides two [`crate::domain::repositories::AttendanceSource`] implementations:
//! - [`HttpAttendanceSource`] - Remote attendance service over HTTP
//! - [`RosterAttendanceSource`] - Counts derived from the configured roster

mod http_source;
mod roster_source;

pub use http_source::HttpAttendanceSource;
pub use roster_source::RosterAttendanceSource;
