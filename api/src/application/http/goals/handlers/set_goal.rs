use axum::extract::{Path, State};
use nutriscan_core::domain::{
    goal::{GoalSet, GoalTrackerService, NutrientGoal},
    product::Nutrient,
};

use crate::application::http::{
    goals::validators::SetGoalRequest,
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
    path = "/{nutrient}",
    tag = "goals",
    summary = "Set one nutrient goal",
    description = "Replaces the goal for one nutrient. The max must be at least the target and the min at most the target.",
    params(
        ("nutrient" = String, Path, description = "One of calories, sugar, sodium, protein, fiber, fat"),
    ),
    responses(
        (status = 200, body = GoalSet),
        (status = 400, description = "Unknown nutrient or inconsistent goal")
    ),
    request_body = SetGoalRequest
)]
pub async fn set_goal(
    Path(nutrient): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetGoalRequest>,
) -> Result<Response<GoalSet>, ApiError> {
    let nutrient: Nutrient = nutrient.parse().map_err(ApiError::from)?;
    let _guard = state.write_lock.lock().await;

    let goals = state
        .service
        .set_goal(
            nutrient,
            NutrientGoal::new(payload.target, payload.max, payload.min),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(goals))
}
