use axum::extract::{Query, State};
use nutriscan_core::domain::history::{DEFAULT_RECENT_LIMIT, HistoryEntry, HistoryService};

use crate::application::http::{
    history::validators::GetHistoryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Get recent scans",
    description = "Newest first. The limit defaults to 10.",
    params(GetHistoryParams),
    responses(
        (status = 200, body = Vec<HistoryEntry>)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<GetHistoryParams>,
) -> Result<Response<Vec<HistoryEntry>>, ApiError> {
    let entries = state
        .service
        .recent_scans(params.limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(entries))
}
