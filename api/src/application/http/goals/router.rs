use super::handlers::{
    get_goals::{__path_get_goals, get_goals},
    reset_goals::{__path_reset_goals, reset_goals},
    set_goal::{__path_set_goal, set_goal},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_goals, set_goal, reset_goals))]
pub struct GoalsApiDoc;

pub fn goals_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/goals", state.args.server.root_path),
            get(get_goals).delete(reset_goals),
        )
        .route(
            &format!("{}/goals/{{nutrient}}", state.args.server.root_path),
            put(set_goal),
        )
}
