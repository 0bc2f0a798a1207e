#![allow(dead_code)]

use async_trait::async_trait;
use attendance_dashboard::domain::entities::{DashboardConfig, Record, Status};
use attendance_dashboard::domain::repositories::AttendanceSource;
use attendance_dashboard::domain::summary::{AttendanceCounts, FetchFailure};
use attendance_dashboard::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source returning a fixed outcome and counting calls.
pub struct StubSource {
    outcome: Result<AttendanceCounts, FetchFailure>,
    pub calls: AtomicUsize,
}

impl StubSource {
    pub fn ok(present: u32, absent: u32) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(AttendanceCounts::new(present, absent)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(FetchFailure::Status(503)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttendanceSource for StubSource {
    async fn fetch_today(&self) -> Result<AttendanceCounts, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

pub fn bob_and_amy() -> Vec<Record> {
    vec![
        Record::new("Bob", "QA", Status::Online, "now"),
        Record::new("Amy", "QA", Status::Offline, "1m"),
    ]
}

pub fn create_test_state(source: Arc<StubSource>) -> AppState {
    AppState::new(DashboardConfig::default(), source)
}

pub fn create_small_state(source: Arc<StubSource>) -> AppState {
    let dashboard = DashboardConfig {
        roster: bob_and_amy(),
        ..DashboardConfig::default()
    };
    AppState::new(dashboard, source)
}
