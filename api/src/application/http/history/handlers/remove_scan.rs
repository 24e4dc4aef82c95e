use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use nutriscan_core::domain::history::HistoryService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{barcode}",
    tag = "history",
    summary = "Remove a scan",
    params(
        ("barcode" = String, Path, description = "Product barcode"),
    ),
    responses(
        (status = 204, description = "Scan removed"),
        (status = 404, description = "Barcode not in the history")
    )
)]
pub async fn remove_scan(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock.lock().await;

    let removed = state
        .service
        .remove_scan(barcode.clone())
        .await
        .map_err(ApiError::from)?;

    if !removed {
        return Err(ApiError::NotFound(format!(
            "barcode '{}' is not in the history",
            barcode
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
