use nutriscan_core::domain::product::{
    entities::ProductRecord, open_food_facts::OpenFoodFactsProduct,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeProductRequest {
    #[validate(custom(function = "validate_barcode"))]
    pub product: ProductRecord,
    /// Grams; defaults to 100.
    #[validate(range(exclusive_min = 0.0, message = "serving_size must be positive"))]
    pub serving_size: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeOpenFoodFactsRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "barcode must be between 1 and 64 characters"
    ))]
    #[validate(custom(function = "validate_non_blank_barcode"))]
    pub barcode: String,
    pub product: OpenFoodFactsProduct,
    #[validate(range(exclusive_min = 0.0, message = "serving_size must be positive"))]
    pub serving_size: Option<f64>,
}

pub fn validate_barcode(product: &ProductRecord) -> Result<(), ValidationError> {
    validate_non_blank_barcode(&product.barcode)
}

pub fn validate_non_blank_barcode(barcode: &str) -> Result<(), ValidationError> {
    if barcode.trim().is_empty() {
        return Err(ValidationError::new("barcode").with_message("barcode is required".into()));
    }
    Ok(())
}
