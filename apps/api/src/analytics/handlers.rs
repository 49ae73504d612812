use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::analytics::aggregate;
use crate::analytics::charts::{
    self, AnimatedBarChart, BarChart, GroupedBarChart, PieChart,
};
use crate::analytics::filter::FilterQuery;
use crate::dataset::FilterOptions;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/filters
pub async fn handle_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.dataset.filter_options())
}

/// GET /api/v1/charts/top-salaries
pub async fn handle_top_salaries(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<BarChart>, AppError> {
    let selection = query.into_selection()?;
    let rows = aggregate::top_paying_titles(state.dataset.rows(), &selection);
    Ok(Json(charts::salary_ranking_chart(&rows)))
}

/// GET /api/v1/charts/top-locations
pub async fn handle_top_locations(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<PieChart>, AppError> {
    let selection = query.into_selection()?;
    if !selection.has_years() || !selection.has_industries() {
        return Ok(Json(charts::location_chart_sentinel()));
    }
    let rows = aggregate::top_hiring_locations(state.dataset.rows(), &selection);
    Ok(Json(charts::location_chart(&rows)))
}

/// GET /api/v1/charts/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<BarChart>, AppError> {
    let selection = query.into_selection()?;
    let rows = aggregate::skill_demand(state.dataset.rows(), &selection);
    Ok(Json(charts::skill_chart(&rows)))
}

/// GET /api/v1/charts/job-counts
pub async fn handle_job_counts(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<PieChart>, AppError> {
    let selection = query.into_selection()?;
    let breakdown = aggregate::job_count_breakdown(state.dataset.rows(), &selection)?;
    Ok(Json(charts::job_count_chart(&breakdown)))
}

/// GET /api/v1/charts/top-companies
pub async fn handle_top_companies(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<AnimatedBarChart>, AppError> {
    let selection = query.into_selection()?;
    let rows = aggregate::top_companies_over_time(state.dataset.rows(), &selection)?;
    Ok(Json(charts::company_timeline_chart(&rows)))
}

/// GET /api/v1/charts/experience-employment
pub async fn handle_experience_employment(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<GroupedBarChart>, AppError> {
    let selection = query.into_selection()?;
    let rows = aggregate::experience_employment(state.dataset.rows(), &selection);
    Ok(Json(charts::experience_chart(&rows)))
}

#[derive(Debug, Serialize)]
pub struct ChartWarning {
    pub chart: String,
    pub message: String,
}

/// Everything the single page needs in one round trip. Charts suppressed by a
/// guard come back null with a warning entry instead of failing the page.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub top_salaries: BarChart,
    pub top_locations: PieChart,
    pub skills: BarChart,
    pub job_counts: Option<PieChart>,
    pub top_companies: Option<AnimatedBarChart>,
    pub experience_employment: Option<GroupedBarChart>,
    pub warnings: Vec<ChartWarning>,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let selection = query.into_selection()?;
    let rows = state.dataset.rows();
    let mut warnings = Vec::new();

    let top_salaries =
        charts::salary_ranking_chart(&aggregate::top_paying_titles(rows, &selection));

    let top_locations = if selection.has_years() && selection.has_industries() {
        charts::location_chart(&aggregate::top_hiring_locations(rows, &selection))
    } else {
        charts::location_chart_sentinel()
    };

    let skills = charts::skill_chart(&aggregate::skill_demand(rows, &selection));

    let job_counts = match aggregate::job_count_breakdown(rows, &selection) {
        Ok(breakdown) => Some(charts::job_count_chart(&breakdown)),
        Err(AppError::MissingFilter(message)) => {
            warnings.push(ChartWarning {
                chart: "job_counts".to_string(),
                message,
            });
            None
        }
        Err(e) => return Err(e),
    };

    let top_companies = match aggregate::top_companies_over_time(rows, &selection) {
        Ok(timeline) => Some(charts::company_timeline_chart(&timeline)),
        Err(AppError::MissingFilter(message)) => {
            warnings.push(ChartWarning {
                chart: "top_companies".to_string(),
                message,
            });
            None
        }
        Err(e) => return Err(e),
    };

    let experience_rows = aggregate::experience_employment(rows, &selection);
    let experience_employment = if experience_rows.is_empty() {
        warnings.push(ChartWarning {
            chart: "experience_employment".to_string(),
            message: "No data available for the selected filters".to_string(),
        });
        None
    } else {
        Some(charts::experience_chart(&experience_rows))
    };

    Ok(Json(DashboardResponse {
        top_salaries,
        top_locations,
        skills,
        job_counts,
        top_companies,
        experience_employment,
        warnings,
    }))
}
