//! Dashboard layout and content configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use super::record::{Record, Status};

/// Everything the dashboard renders that is not derived from user input.
///
/// Supplied once at startup (see [`crate::config::load_dashboard`]). Missing
/// fields in a JSON file fall back to [`DashboardConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "validate_dashboard"))]
pub struct DashboardConfig {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub profile_name: String,
    #[validate(length(min = 1, message = "At least one menu item is required"))]
    pub menu_items: Vec<String>,
    pub active_menu: String,
    #[validate(nested)]
    pub roster: Vec<Record>,
    pub stat_cards: Vec<StatCard>,
    /// Static value shown by a `remote` stat card.
    pub remote_count: Option<u32>,
    pub weekly_trend: ChartSeries,
    pub department_breakdown: ChartSeries,
    pub semester_label: String,
}

/// Which figure a statistic card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Present,
    Absent,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Trend badge displayed next to a statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub percent: u32,
}

/// A statistic card in the stats row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: String,
    #[serde(default)]
    pub trend: Option<Trend>,
}

/// Labelled values backing one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl ChartSeries {
    pub fn new(title: &str, labels: &[&str], values: &[u32]) -> Self {
        Self {
            title: title.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    /// Label/value pairs in display order.
    pub fn points(&self) -> Vec<(&str, u32)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .collect()
    }

    /// Sum of all values, used to compute pie slice shares.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Student Attendance Manager".to_string(),
            profile_name: "Kushal Joshi".to_string(),
            menu_items: ["Attendance", "Student", "Report", "Settings", "Help & Support"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            active_menu: "Attendance".to_string(),
            roster: sample_roster(),
            stat_cards: vec![
                StatCard {
                    kind: StatKind::Present,
                    label: "Present Today".to_string(),
                    trend: Some(Trend {
                        direction: TrendDirection::Up,
                        percent: 5,
                    }),
                },
                StatCard {
                    kind: StatKind::Absent,
                    label: "Absent".to_string(),
                    trend: Some(Trend {
                        direction: TrendDirection::Down,
                        percent: 2,
                    }),
                },
            ],
            remote_count: None,
            weekly_trend: ChartSeries::new(
                "Weekly Attendance Trend",
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                &[12, 19, 14, 20, 18, 24, 22],
            ),
            department_breakdown: ChartSeries::new(
                "Department Breakdown",
                &[
                    "Theory Of Computation",
                    "Fundamentals of Predictive Analysis",
                    "Data Science",
                    "Reactive Architecture",
                    "Big Data Technologies",
                ],
                &[20, 15, 30, 25, 10],
            ),
            semester_label: "Sem V".to_string(),
        }
    }
}

fn sample_roster() -> Vec<Record> {
    use Status::{Offline, Online};

    [
        ("Elaine", "Software Engineer", Online, "Just now"),
        ("Yuval", "Product Manager", Offline, "10 mins ago"),
        ("Arohi", "QA Engineer", Offline, "Yesterday"),
        ("Mohit", "Software Engineer", Online, "5 mins ago"),
        ("Anugya", "Product Manager", Online, "15 mins ago"),
        ("Nandini", "Designer", Online, "Just now"),
        ("Shreya", "Software Engineer", Offline, "1 min ago"),
        ("Nelay", "Tester", Online, "10 secs ago"),
        ("Ashita", "Developer", Online, "30 mins ago"),
        ("Akshita", "Software Engineer", Offline, "45 mins ago"),
    ]
    .into_iter()
    .map(|(name, role, status, last_login)| Record::new(name, role, status, last_login))
    .collect()
}

fn validate_dashboard(config: &DashboardConfig) -> Result<(), ValidationError> {
    if !config.menu_items.contains(&config.active_menu) {
        return Err(ValidationError::new("active_menu")
            .with_message("Active menu item must be one of the menu items".into()));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = config
        .roster
        .iter()
        .find(|record| !seen.insert(record.name.as_str()))
    {
        let mut err = ValidationError::new("roster")
            .with_message("Roster names must be unique".into());
        err.add_param("name".into(), &duplicate.name);
        return Err(err);
    }

    for chart in [&config.weekly_trend, &config.department_breakdown] {
        if chart.labels.len() != chart.values.len() {
            let mut err = ValidationError::new("chart")
                .with_message("Chart labels and values must have the same length".into());
            err.add_param("title".into(), &chart.title);
            return Err(err);
        }
    }

    let has_remote = config
        .stat_cards
        .iter()
        .any(|card| card.kind == StatKind::Remote);
    if has_remote && config.remote_count.is_none() {
        return Err(ValidationError::new("remote_count")
            .with_message("A remote stat card requires remoteCount".into()));
    }

    Ok(())
}
