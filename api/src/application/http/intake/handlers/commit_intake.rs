use axum::extract::State;
use nutriscan_core::domain::goal::{
    DEFAULT_SERVING_SIZE, GoalTrackerService, IntakeEntry, IntakeInput,
};

use crate::application::http::{
    intake::validators::IntakeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "intake",
    summary = "Log a consumed product",
    description = "Adds the serving's nutrients to today's totals. Call once per accepted scan.",
    responses(
        (status = 201, body = IntakeEntry),
        (status = 400, description = "Invalid product or serving size")
    ),
    request_body = IntakeRequest
)]
pub async fn commit_intake(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IntakeRequest>,
) -> Result<Response<IntakeEntry>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let entry = state
        .service
        .commit_intake(IntakeInput {
            product: payload.product,
            serving_size: payload.serving_size.unwrap_or(DEFAULT_SERVING_SIZE),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(entry))
}
