use axum::extract::State;
use nutriscan_core::domain::{
    analysis::{AnalysisService, AnalysisVerdict, AnalyzeOpenFoodFactsInput},
    goal::DEFAULT_SERVING_SIZE,
};

use crate::application::http::{
    analysis::validators::AnalyzeOpenFoodFactsRequest,
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
    path = "/open-food-facts",
    tag = "analysis",
    summary = "Analyze an Open Food Facts product",
    description = "Maps an Open Food Facts product object to a product record, then analyzes it like POST /analysis.",
    responses(
        (status = 200, body = AnalysisVerdict),
        (status = 400, description = "Invalid barcode or serving size")
    ),
    request_body = AnalyzeOpenFoodFactsRequest
)]
pub async fn analyze_open_food_facts(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeOpenFoodFactsRequest>,
) -> Result<Response<AnalysisVerdict>, ApiError> {
    let verdict = state
        .service
        .analyze_open_food_facts(AnalyzeOpenFoodFactsInput {
            barcode: payload.barcode,
            payload: payload.product,
            serving_size: payload.serving_size.unwrap_or(DEFAULT_SERVING_SIZE),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(verdict))
}
