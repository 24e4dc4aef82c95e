use axum::extract::{Path, State};
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/allergens/{name}",
    tag = "profile",
    summary = "Add an allergen",
    description = "Adding an allergen that is already selected changes nothing",
    params(
        ("name" = String, Path, description = "Allergen name, e.g. milk"),
    ),
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Unknown allergen")
    )
)]
pub async fn add_allergen(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let profile = state
        .service
        .add_allergen(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
