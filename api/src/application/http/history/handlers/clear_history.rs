use axum::{extract::State, http::StatusCode};
use nutriscan_core::domain::history::HistoryService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "",
    tag = "history",
    summary = "Clear the scan history",
    responses(
        (status = 204, description = "History cleared")
    )
)]
pub async fn clear_history(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock.lock().await;

    state.service.clear_history().await.map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
