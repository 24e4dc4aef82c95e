use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    export_history::{__path_export_history, export_history},
    get_history::{__path_get_history, get_history},
    get_stats::{__path_get_stats, get_stats},
    import_history::{__path_import_history, import_history},
    record_scan::{__path_record_scan, record_scan},
    remove_scan::{__path_remove_scan, remove_scan},
    search_history::{__path_search_history, search_history},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_history,
    record_scan,
    clear_history,
    get_stats,
    search_history,
    import_history,
    export_history,
    remove_scan
))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).post(record_scan).delete(clear_history),
        )
        .route(
            &format!("{}/history/stats", state.args.server.root_path),
            get(get_stats),
        )
        .route(
            &format!("{}/history/search", state.args.server.root_path),
            get(search_history),
        )
        .route(
            &format!("{}/history/import", state.args.server.root_path),
            post(import_history),
        )
        .route(
            &format!("{}/history/export", state.args.server.root_path),
            get(export_history),
        )
        .route(
            &format!("{}/history/{{barcode}}", state.args.server.root_path),
            delete(remove_scan),
        )
}
