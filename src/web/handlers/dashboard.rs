//! Dashboard page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use validator::Validate;

use crate::api::dto::roster::RosterQueryParams;
use crate::domain::summary::SummaryState;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view::{
    self, ChartView, HeaderView, MenuItemView, RowView, StatCardView, EMPTY_ROSTER_TEXT,
};

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with:
/// - Sidebar menu and header with search
/// - Stat cards driven by the attendance summary
/// - Weekly trend and department breakdown charts
/// - The filtered, sorted roster table
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub profile_name: String,
    pub menu: Vec<MenuItemView>,
    pub search: String,
    /// Active sort, resubmitted by the search forms. Empty when unsorted.
    pub sort_key: &'static str,
    pub sort_dir: &'static str,
    pub stat_cards: Vec<StatCardView>,
    pub summary_failed: bool,
    pub weekly: ChartView,
    pub departments: ChartView,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub empty_text: &'static str,
    pub retry_href: String,
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Query Parameters
///
/// Same as `GET /api/roster`: `q`, `sort`, `dir`.
///
/// # Errors
///
/// Returns 400 Bad Request for unknown sort parameters.
///
/// Both search forms carry the active sort as hidden fields, so searching
/// keeps the current column order.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<RosterQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;
    let sort = params.directive()?;

    let config = &state.dashboard;
    let summary = state.summary_service.state();
    let records = state.roster_service.query(&params.q, sort);

    Ok(DashboardTemplate {
        title: config.title.clone(),
        profile_name: config.profile_name.clone(),
        menu: view::menu(config),
        stat_cards: view::stat_cards(config, &summary),
        summary_failed: matches!(summary, SummaryState::Error { .. }),
        weekly: view::line_chart(&config.weekly_trend),
        departments: view::pie_chart(&config.department_breakdown),
        headers: view::headers(&params.q, sort),
        rows: view::rows(&records, &config.semester_label),
        empty_text: EMPTY_ROSTER_TEXT,
        retry_href: format!(
            "/dashboard/refresh{}",
            view::dashboard_href(&params.q, sort).trim_start_matches("/dashboard")
        ),
        sort_key: sort.key.map(|k| k.as_str()).unwrap_or_default(),
        sort_dir: sort.direction.as_str(),
        search: params.q,
    })
}

/// Retries the attendance fetch, then returns to the dashboard.
///
/// # Endpoint
///
/// `GET /dashboard/refresh`
///
/// Search and sort parameters are carried over to the redirect. A refresh
/// already in flight is not retried again; the page simply reloads.
///
/// # Errors
///
/// Returns 400 Bad Request for the same parameters `GET /dashboard` rejects.
pub async fn refresh_handler(
    State(state): State<AppState>,
    Query(params): Query<RosterQueryParams>,
) -> Result<Redirect, AppError> {
    params.validate()?;
    let sort = params.directive()?;

    if let Err(e) = state.summary_service.refresh().await {
        tracing::debug!(error = %e, "Dashboard refresh skipped");
    }

    Ok(Redirect::to(&view::dashboard_href(&params.q, sort)))
}
