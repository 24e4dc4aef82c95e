use axum::extract::State;
use nutriscan_core::domain::profile::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergensResponse {
    pub allergens: Vec<String>,
    pub available_allergens: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/allergens",
    tag = "profile",
    summary = "Get the user's allergens",
    description = "Returns the selected allergens and every allergen the reference data knows",
    responses(
        (status = 200, body = GetAllergensResponse)
    )
)]
pub async fn get_allergens(
    State(state): State<AppState>,
) -> Result<Response<GetAllergensResponse>, ApiError> {
    let profile = state.service.get_profile().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergensResponse {
        allergens: profile.allergens.into_iter().collect(),
        available_allergens: state
            .service
            .reference_data()
            .allergens
            .names()
            .map(str::to_string)
            .collect(),
    }))
}
