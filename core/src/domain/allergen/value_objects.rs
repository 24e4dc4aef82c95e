use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenMatch {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    /// Keywords found in the ingredient text. Empty when the match came from
    /// the allergen tags alone.
    pub matched_keywords: Vec<String>,
    pub is_user_allergen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Safe,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenWarning {
    pub level: WarningLevel,
    pub message: String,
    pub action: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenReport {
    pub has_allergens: bool,
    pub has_user_allergens: bool,
    pub all_allergens: Vec<AllergenMatch>,
    pub user_allergens: Vec<AllergenMatch>,
    pub safety_score: u8,
    pub warning: AllergenWarning,
}
