use crate::application::http::{
    analysis::router::AnalysisApiDoc, goals::router::GoalsApiDoc, health::HealthApiDoc,
    history::router::HistoryApiDoc, intake::router::IntakeApiDoc,
    profile::router::ProfileApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriScan API"
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/goals", api = GoalsApiDoc),
        (path = "/intake", api = IntakeApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
