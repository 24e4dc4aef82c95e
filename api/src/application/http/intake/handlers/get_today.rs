use axum::extract::State;
use nutriscan_core::domain::goal::{DailyIntakeLedger, GoalTrackerService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/today",
    tag = "intake",
    summary = "Get today's intake",
    responses(
        (status = 200, body = DailyIntakeLedger)
    )
)]
pub async fn get_today(
    State(state): State<AppState>,
) -> Result<Response<DailyIntakeLedger>, ApiError> {
    let ledger = state.service.today_intake().await.map_err(ApiError::from)?;

    Ok(Response::OK(ledger))
}
