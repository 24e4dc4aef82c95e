use axum::extract::{Path, State};
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/allergens/{name}",
    tag = "profile",
    summary = "Remove an allergen",
    params(
        ("name" = String, Path, description = "Allergen name"),
    ),
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn remove_allergen(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let profile = state
        .service
        .remove_allergen(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
