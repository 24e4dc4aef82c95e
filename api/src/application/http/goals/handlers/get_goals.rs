use axum::extract::State;
use nutriscan_core::domain::goal::{GoalSet, GoalTrackerService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "goals",
    summary = "Get daily nutrient goals",
    description = "Returns the stored goals, or the reference defaults when none are stored",
    responses(
        (status = 200, body = GoalSet)
    )
)]
pub async fn get_goals(State(state): State<AppState>) -> Result<Response<GoalSet>, ApiError> {
    let goals = state.service.get_goals().await.map_err(ApiError::from)?;

    Ok(Response::OK(goals))
}
