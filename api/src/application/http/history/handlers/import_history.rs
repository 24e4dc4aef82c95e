use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use nutriscan_core::domain::history::{HistoryEntry, HistoryService, ImportSummary};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/import",
    tag = "history",
    summary = "Import scan history",
    description = "Accepts the array produced by GET /history/export. Imported entries win over stored ones with the same barcode.",
    responses(
        (status = 200, body = ImportSummary),
        (status = 400, description = "Malformed body or entry without barcode")
    ),
    request_body = Vec<HistoryEntry>
)]
pub async fn import_history(
    State(state): State<AppState>,
    payload: Result<Json<Vec<HistoryEntry>>, JsonRejection>,
) -> Result<Response<ImportSummary>, ApiError> {
    let Json(entries) = payload?;
    let _guard = state.write_lock.lock().await;

    let summary = state
        .service
        .import_history(entries)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
