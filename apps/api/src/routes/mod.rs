pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::feedback::handlers as feedback;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Filter metadata for the two multiselects
        .route("/api/v1/filters", get(analytics::handle_filter_options))
        // Whole page in one round trip
        .route("/api/v1/dashboard", get(analytics::handle_dashboard))
        // Individual charts
        .route(
            "/api/v1/charts/top-salaries",
            get(analytics::handle_top_salaries),
        )
        .route(
            "/api/v1/charts/top-locations",
            get(analytics::handle_top_locations),
        )
        .route("/api/v1/charts/skills", get(analytics::handle_skills))
        .route(
            "/api/v1/charts/job-counts",
            get(analytics::handle_job_counts),
        )
        .route(
            "/api/v1/charts/top-companies",
            get(analytics::handle_top_companies),
        )
        .route(
            "/api/v1/charts/experience-employment",
            get(analytics::handle_experience_employment),
        )
        // Feedback form
        .route("/api/v1/feedback", post(feedback::handle_submit_feedback))
        .with_state(state)
}
