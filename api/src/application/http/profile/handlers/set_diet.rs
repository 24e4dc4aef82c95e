use axum::extract::State;
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::{
    profile::validators::SetDietRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/diet",
    tag = "profile",
    summary = "Select a diet",
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Unknown diet")
    ),
    request_body = SetDietRequest
)]
pub async fn set_diet(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetDietRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let profile = state
        .service
        .set_diet(payload.diet)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
