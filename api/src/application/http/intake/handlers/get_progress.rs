use axum::extract::State;
use nutriscan_core::domain::goal::{DailyProgress, GoalTrackerService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/progress",
    tag = "intake",
    summary = "Get today's progress per nutrient",
    description = "Current total, percentage of target, remaining allowance and status for every goal",
    responses(
        (status = 200, body = DailyProgress)
    )
)]
pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Response<DailyProgress>, ApiError> {
    let progress = state.service.daily_progress().await.map_err(ApiError::from)?;

    Ok(Response::OK(progress))
}
