//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::attendance`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod attendance_source;

pub use attendance_source::AttendanceSource;

#[cfg(test)]
pub use attendance_source::MockAttendanceSource;
