//! Business logic services for the application layer.

pub mod roster_service;
pub mod summary_service;

pub use roster_service::RosterService;
pub use summary_service::SummaryService;
