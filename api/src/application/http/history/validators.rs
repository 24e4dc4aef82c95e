use nutriscan_core::domain::product::entities::ProductRecord;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::analysis::validators::validate_barcode;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecordScanRequest {
    #[validate(custom(function = "validate_barcode"))]
    pub product: ProductRecord,
    #[validate(range(max = 100, message = "health_score must be between 0 and 100"))]
    pub health_score: u8,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetHistoryParams {
    #[schema(example = 10)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchHistoryParams {
    /// Matched against name and brand ignoring case, and against the barcode as is.
    #[schema(example = "oat")]
    pub q: String,
}
