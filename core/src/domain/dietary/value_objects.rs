use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietViolation {
    pub ingredient: String,
    pub reason: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietWarning {
    pub message: String,
    pub reason: String,
    /// Terms behind an aggregated warning such as high carbohydrate content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietRecommendation {
    pub suitable: bool,
    pub message: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietaryReport {
    pub diet: String,
    pub compatible: bool,
    pub score: u8,
    pub violations: Vec<DietViolation>,
    pub warnings: Vec<DietWarning>,
    /// Personal avoid-list hits. Reported only; they never change the score.
    pub avoided_ingredients: Vec<String>,
    pub recommendation: DietRecommendation,
}
