use axum::extract::State;
use nutriscan_core::domain::goal::{
    DEFAULT_SERVING_SIZE, GoalImpact, GoalTrackerService, IntakeInput,
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
    path = "/projection",
    tag = "intake",
    summary = "Forecast a product against today's goals",
    description = "Same computation as the goal section of an analysis. Nothing is written.",
    responses(
        (status = 200, body = GoalImpact),
        (status = 400, description = "Invalid product or serving size")
    ),
    request_body = IntakeRequest
)]
pub async fn project_intake(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IntakeRequest>,
) -> Result<Response<GoalImpact>, ApiError> {
    let impact = state
        .service
        .project_intake(IntakeInput {
            product: payload.product,
            serving_size: payload.serving_size.unwrap_or(DEFAULT_SERVING_SIZE),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(impact))
}
