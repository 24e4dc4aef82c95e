use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthFactor {
    pub name: String,
    pub impact: i32,
    pub value: String,
}

impl HealthFactor {
    pub fn new(name: &str, impact: i32, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            impact,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    pub score: u8,
    pub factors: Vec<HealthFactor>,
    pub description: String,
    pub recommendation: String,
}
