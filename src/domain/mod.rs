//! Domain layer containing entities and pure dashboard logic.
//!
//! Nothing here performs I/O. Data sources are reached through the traits in
//! [`repositories`], implemented by [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Roster records and dashboard configuration
//! - [`roster_query`] - Filter and sort engine for the roster table
//! - [`summary`] - Loading / error / ready state machine for today's counts
//! - [`repositories`] - Attendance source trait
//!
//! # Summary Flow
//!
//! 1. [`crate::application::services::SummaryService`] enters `Loading`
//! 2. It asks a [`repositories::AttendanceSource`] for today's counts
//! 3. [`summary::AttendanceSummary::resolve`] settles into `Ready` or `Error`

pub mod entities;
pub mod repositories;
pub mod roster_query;
pub mod summary;
