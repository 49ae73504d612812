use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::feedback::models::{Feedback, FeedbackReceipt};
use crate::state::AppState;

/// POST /api/v1/feedback
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(feedback): Json<Feedback>,
) -> Result<Json<FeedbackReceipt>, AppError> {
    feedback.validate()?;
    state.feedback.deliver(&feedback).await?;
    Ok(Json(FeedbackReceipt::accepted()))
}
