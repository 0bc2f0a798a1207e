//! View models for the dashboard template.
//!
//! Everything here is recomputed from current inputs on each render.

use url::form_urlencoded;

use crate::domain::entities::{
    ChartSeries, DashboardConfig, Record, StatCard, StatKind, TrendDirection,
};
use crate::domain::roster_query::{SortDirection, SortDirective, SortKey};
use crate::domain::summary::SummaryState;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_ROSTER_TEXT: &str = "No users found.";

pub struct MenuItemView {
    pub label: String,
    pub active: bool,
}

pub struct StatCardView {
    /// `present`, `absent` or `remote`; used as CSS class.
    pub kind: &'static str,
    pub label: String,
    pub value: String,
    pub trend_class: &'static str,
    pub trend_text: String,
}

pub struct ChartPointView {
    pub label: String,
    pub value: u32,
    /// Bar length or slice share, 0-100.
    pub percent: u32,
}

pub struct ChartView {
    pub title: String,
    pub points: Vec<ChartPointView>,
}

/// Table header cell. `href` is empty for columns that cannot be sorted.
pub struct HeaderView {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
}

pub struct RowView {
    pub name: String,
    pub role: String,
    pub semester: String,
    pub status_class: &'static str,
    pub status_label: &'static str,
    pub last_login: String,
}

pub fn menu(config: &DashboardConfig) -> Vec<MenuItemView> {
    config
        .menu_items
        .iter()
        .map(|label| MenuItemView {
            label: label.clone(),
            active: *label == config.active_menu,
        })
        .collect()
}

/// Stat cards for the current summary state.
///
/// Present and absent cards show `Loading...`, the fixed error message, or the
/// count. Remote cards always show the configured static value.
pub fn stat_cards(config: &DashboardConfig, summary: &SummaryState) -> Vec<StatCardView> {
    config
        .stat_cards
        .iter()
        .map(|card| stat_card(card, summary, config.remote_count))
        .collect()
}

fn stat_card(card: &StatCard, summary: &SummaryState, remote_count: Option<u32>) -> StatCardView {
    let (kind, value) = match card.kind {
        StatKind::Present => ("present", summary_value(summary, |present, _| present)),
        StatKind::Absent => ("absent", summary_value(summary, |_, absent| absent)),
        StatKind::Remote => ("remote", remote_count.unwrap_or_default().to_string()),
    };

    let (trend_class, trend_text) = match &card.trend {
        Some(trend) => match trend.direction {
            TrendDirection::Up => ("up", format!("↑ {}%", trend.percent)),
            TrendDirection::Down => ("down", format!("↓ {}%", trend.percent)),
        },
        None => ("", String::new()),
    };

    StatCardView {
        kind,
        label: card.label.clone(),
        value,
        trend_class,
        trend_text,
    }
}

fn summary_value(summary: &SummaryState, pick: impl Fn(u32, u32) -> u32) -> String {
    match summary {
        SummaryState::Loading => LOADING_TEXT.to_string(),
        SummaryState::Error { message } => message.clone(),
        SummaryState::Ready { present, absent } => pick(*present, *absent).to_string(),
    }
}

/// Bars scaled against the largest value.
pub fn line_chart(series: &ChartSeries) -> ChartView {
    let max = series.max();
    chart(series, u64::from(max))
}

/// Slices as a share of the total.
pub fn pie_chart(series: &ChartSeries) -> ChartView {
    let total = series.total();
    chart(series, total)
}

fn chart(series: &ChartSeries, scale: u64) -> ChartView {
    let points = series
        .points()
        .into_iter()
        .map(|(label, value)| ChartPointView {
            label: label.to_string(),
            value,
            // value <= scale, so the share always fits back into u32.
            percent: if scale == 0 {
                0
            } else {
                (u64::from(value) * 100 / scale) as u32
            },
        })
        .collect();

    ChartView {
        title: series.title.clone(),
        points,
    }
}

/// Query string for `/dashboard` that keeps `term` and applies `sort`.
pub fn dashboard_href(term: &str, sort: SortDirective) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !term.is_empty() {
        query.append_pair("q", term);
    }
    if let Some(key) = sort.key {
        query.append_pair("sort", key.as_str());
        query.append_pair("dir", sort.direction.as_str());
    }

    let query = query.finish();
    if query.is_empty() {
        "/dashboard".to_string()
    } else {
        format!("/dashboard?{query}")
    }
}

/// Header cells. Name and Status link to the toggled directive; the other
/// columns are sortable through the JSON API only.
pub fn headers(term: &str, sort: SortDirective) -> Vec<HeaderView> {
    let sortable = |label: &'static str, key: SortKey| HeaderView {
        label,
        href: dashboard_href(term, sort.toggle(key)),
        indicator: match sort.indicator_for(key) {
            Some(SortDirection::Asc) => "↑",
            Some(SortDirection::Desc) => "↓",
            None => "",
        },
    };

    let fixed = |label: &'static str| HeaderView {
        label,
        href: String::new(),
        indicator: "",
    };

    vec![
        sortable("Name", SortKey::Name),
        fixed("Role"),
        fixed("Semester"),
        sortable("Status", SortKey::Status),
        fixed("Last Login"),
    ]
}

pub fn rows(records: &[&Record], semester: &str) -> Vec<RowView> {
    records
        .iter()
        .map(|record| RowView {
            name: record.name.clone(),
            role: record.role.clone(),
            semester: semester.to_string(),
            status_class: record.status.css_class(),
            status_label: record.status.attendance_label(),
            last_login: record.last_login.clone(),
        })
        .collect()
}
