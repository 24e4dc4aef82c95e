use axum::{
    Json,
    extract::State,
    http::header::CONTENT_DISPOSITION,
    response::IntoResponse,
};
use nutriscan_core::domain::{
    common::today,
    history::{HistoryEntry, HistoryService},
};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/export",
    tag = "history",
    summary = "Export scan history",
    description = "Every entry, newest first, served as a nutriscan-history-YYYY-MM-DD.json attachment",
    responses(
        (status = 200, body = Vec<HistoryEntry>)
    )
)]
pub async fn export_history(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.service.export_history().await.map_err(ApiError::from)?;
    let disposition = format!(
        "attachment; filename=\"nutriscan-history-{}.json\"",
        today().format("%Y-%m-%d")
    );

    Ok(([(CONTENT_DISPOSITION, disposition)], Json(entries)))
}
