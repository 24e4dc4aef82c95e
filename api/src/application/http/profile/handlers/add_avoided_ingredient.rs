use axum::extract::{Path, State};
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/avoided/{term}",
    tag = "profile",
    summary = "Avoid an ingredient",
    description = "Products whose ingredients mention the term are flagged in the dietary report",
    params(
        ("term" = String, Path, description = "Free-form ingredient term, e.g. palm oil"),
    ),
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Blank term")
    )
)]
pub async fn add_avoided_ingredient(
    Path(term): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let profile = state
        .service
        .add_avoided_ingredient(term)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
