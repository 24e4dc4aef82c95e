use axum::extract::{Query, State};
use nutriscan_core::domain::history::{HistoryEntry, HistoryService};

use crate::application::http::{
    history::validators::SearchHistoryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/search",
    tag = "history",
    summary = "Search scanned products",
    params(SearchHistoryParams),
    responses(
        (status = 200, body = Vec<HistoryEntry>)
    )
)]
pub async fn search_history(
    State(state): State<AppState>,
    Query(params): Query<SearchHistoryParams>,
) -> Result<Response<Vec<HistoryEntry>>, ApiError> {
    let entries = state
        .service
        .search_history(params.q)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(entries))
}
