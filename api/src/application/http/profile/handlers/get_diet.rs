use axum::extract::State;
use nutriscan_core::domain::profile::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietResponse {
    pub diet: String,
    pub available_diets: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/diet",
    tag = "profile",
    summary = "Get the selected diet",
    description = "Returns the selected diet and every diet the reference data knows",
    responses(
        (status = 200, body = GetDietResponse)
    )
)]
pub async fn get_diet(
    State(state): State<AppState>,
) -> Result<Response<GetDietResponse>, ApiError> {
    let profile = state.service.get_profile().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetDietResponse {
        diet: profile.diet,
        available_diets: state
            .service
            .reference_data()
            .diets
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}
