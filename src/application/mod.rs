//! Application layer services implementing dashboard behaviour.
//!
//! Services own the shared state behind the handlers and call into the pure
//! domain logic and the repository traits.
//!
//! # Available Services
//!
//! - [`services::roster_service::RosterService`] - Roster snapshot and table queries
//! - [`services::summary_service::SummaryService`] - Today's attendance summary

pub mod services;
