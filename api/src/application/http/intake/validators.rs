use nutriscan_core::domain::product::entities::ProductRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::analysis::validators::validate_barcode;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct IntakeRequest {
    #[validate(custom(function = "validate_barcode"))]
    pub product: ProductRecord,
    /// Grams; defaults to 100.
    #[validate(range(exclusive_min = 0.0, message = "serving_size must be positive"))]
    pub serving_size: Option<f64>,
}
