use axum::extract::{Path, State};
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/avoided/{term}",
    tag = "profile",
    summary = "Stop avoiding an ingredient",
    params(
        ("term" = String, Path, description = "Ingredient term"),
    ),
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn remove_avoided_ingredient(
    Path(term): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let profile = state
        .service
        .remove_avoided_ingredient(term)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
