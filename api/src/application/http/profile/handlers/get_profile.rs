use axum::extract::State;
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get the user profile",
    description = "Returns the diet, allergens and avoided ingredients. A default profile is returned when none is stored.",
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state.service.get_profile().await.map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
