//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`attendance`] - Attendance sources (remote HTTP and roster-derived)

pub mod attendance;
