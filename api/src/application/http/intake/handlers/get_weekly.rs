use axum::extract::State;
use nutriscan_core::domain::goal::{DayStats, GoalTrackerService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/weekly",
    tag = "intake",
    summary = "Get the last seven days of intake",
    description = "Seven entries, oldest first and ending today. Days without a ledger are zeroed.",
    responses(
        (status = 200, body = Vec<DayStats>)
    )
)]
pub async fn get_weekly(
    State(state): State<AppState>,
) -> Result<Response<Vec<DayStats>>, ApiError> {
    let stats = state.service.weekly_stats().await.map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
