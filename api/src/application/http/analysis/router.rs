use super::handlers::{
    analyze_open_food_facts::{__path_analyze_open_food_facts, analyze_open_food_facts},
    analyze_product::{__path_analyze_product, analyze_product},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_product, analyze_open_food_facts))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis", state.args.server.root_path),
            post(analyze_product),
        )
        .route(
            &format!("{}/analysis/open-food-facts", state.args.server.root_path),
            post(analyze_open_food_facts),
        )
}
