use axum::extract::State;
use nutriscan_core::domain::profile::{ProfileService, UserProfile};

use crate::application::http::{
    profile::validators::SetAllergensRequest,
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
    path = "/allergens",
    tag = "profile",
    summary = "Replace the user's allergens",
    description = "Replaces the whole allergen set. Nothing changes if any name is unknown.",
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Unknown allergen")
    ),
    request_body = SetAllergensRequest
)]
pub async fn set_allergens(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetAllergensRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let profile = state
        .service
        .set_allergens(payload.allergens)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
