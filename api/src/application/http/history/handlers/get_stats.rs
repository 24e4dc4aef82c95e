use axum::extract::State;
use nutriscan_core::domain::history::{HistoryService, HistoryStats};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "history",
    summary = "Get scan history statistics",
    responses(
        (status = 200, body = HistoryStats)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<Response<HistoryStats>, ApiError> {
    let stats = state.service.history_stats().await.map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
