use axum::extract::State;
use nutriscan_core::domain::goal::{GoalSet, GoalTrackerService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "",
    tag = "goals",
    summary = "Reset goals to the defaults",
    responses(
        (status = 200, body = GoalSet)
    )
)]
pub async fn reset_goals(State(state): State<AppState>) -> Result<Response<GoalSet>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let goals = state.service.reset_goals().await.map_err(ApiError::from)?;

    Ok(Response::OK(goals))
}
