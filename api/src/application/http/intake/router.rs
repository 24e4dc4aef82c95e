use super::handlers::{
    commit_intake::{__path_commit_intake, commit_intake},
    get_progress::{__path_get_progress, get_progress},
    get_today::{__path_get_today, get_today},
    get_weekly::{__path_get_weekly, get_weekly},
    project_intake::{__path_project_intake, project_intake},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(commit_intake, project_intake, get_today, get_progress, get_weekly))]
pub struct IntakeApiDoc;

pub fn intake_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/intake", state.args.server.root_path),
            post(commit_intake),
        )
        .route(
            &format!("{}/intake/projection", state.args.server.root_path),
            post(project_intake),
        )
        .route(
            &format!("{}/intake/today", state.args.server.root_path),
            get(get_today),
        )
        .route(
            &format!("{}/intake/progress", state.args.server.root_path),
            get(get_progress),
        )
        .route(
            &format!("{}/intake/weekly", state.args.server.root_path),
            get(get_weekly),
        )
}
