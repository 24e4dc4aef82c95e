use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetGoalRequest {
    #[validate(range(exclusive_min = 0.0, message = "target must be positive"))]
    pub target: f64,
    #[validate(range(min = 0.0, message = "max must not be negative"))]
    pub max: Option<f64>,
    #[validate(range(min = 0.0, message = "min must not be negative"))]
    pub min: Option<f64>,
}
