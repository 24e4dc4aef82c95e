use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetDietRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "diet must be between 1 and 64 characters"
    ))]
    pub diet: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetAllergensRequest {
    #[validate(length(max = 64, message = "at most 64 allergens can be set"))]
    pub allergens: Vec<String>,
}
