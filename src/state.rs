//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{RosterService, SummaryService};
use crate::domain::entities::{DashboardConfig, Record};
use crate::domain::repositories::AttendanceSource;
use crate::infrastructure::attendance::RosterAttendanceSource;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardConfig>,
    pub roster_service: Arc<RosterService>,
    pub summary_service: Arc<SummaryService>,
    /// Counts served at `/api/attendance/today`, always derived from the roster.
    pub roster_attendance: Arc<RosterAttendanceSource>,
}

impl AppState {
    /// Wires services over `dashboard`, using `source` for the summary cards.
    pub fn new(dashboard: DashboardConfig, source: Arc<dyn AttendanceSource>) -> Self {
        let roster: Arc<[Record]> = dashboard.roster.clone().into();

        Self {
            dashboard: Arc::new(dashboard),
            roster_service: Arc::new(RosterService::new(Arc::clone(&roster))),
            summary_service: Arc::new(SummaryService::new(source)),
            roster_attendance: Arc::new(RosterAttendanceSource::new(roster)),
        }
    }
}
