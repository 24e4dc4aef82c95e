use axum::extract::State;
use nutriscan_core::domain::history::{HistoryEntry, HistoryService, RecordScanInput};

use crate::application::http::{
    history::validators::RecordScanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Record a scan",
    description = "A barcode already in the history is updated in place; new barcodes go to the front. At most 100 entries are kept.",
    responses(
        (status = 201, body = HistoryEntry),
        (status = 400, description = "Missing barcode or invalid score")
    ),
    request_body = RecordScanRequest
)]
pub async fn record_scan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordScanRequest>,
) -> Result<Response<HistoryEntry>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let entry = state
        .service
        .record_scan(RecordScanInput {
            product: payload.product,
            health_score: payload.health_score,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(entry))
}
