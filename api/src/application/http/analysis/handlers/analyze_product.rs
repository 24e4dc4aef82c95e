use axum::extract::State;
use nutriscan_core::domain::{
    analysis::{AnalysisService, AnalysisVerdict, AnalyzeProductInput},
    goal::DEFAULT_SERVING_SIZE,
};

use crate::application::http::{
    analysis::validators::AnalyzeProductRequest,
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
    tag = "analysis",
    summary = "Analyze a product",
    description = "Runs allergen, diet, goal and health analysis against the stored profile, goals and today's intake. Nothing is written.",
    responses(
        (status = 200, body = AnalysisVerdict),
        (status = 400, description = "Invalid product or serving size")
    ),
    request_body = AnalyzeProductRequest
)]
pub async fn analyze_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeProductRequest>,
) -> Result<Response<AnalysisVerdict>, ApiError> {
    let verdict = state
        .service
        .analyze_product(AnalyzeProductInput {
            product: payload.product,
            serving_size: payload.serving_size.unwrap_or(DEFAULT_SERVING_SIZE),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(verdict))
}
