use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    allergen::AllergenReport,
    dietary::DietaryReport,
    goal::{entities::DailyIntakeLedger, entities::GoalSet, value_objects::GoalImpact},
    health_score::HealthReport,
    profile::entities::UserProfile,
};

/// Read-only snapshot of the user state an analysis runs against.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    pub profile: UserProfile,
    pub goals: GoalSet,
    pub ledger: DailyIntakeLedger,
}

/// Combined result of the four analyzers for one product. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisVerdict {
    pub barcode: String,
    pub product_name: String,
    pub serving_size: f64,
    pub allergens: AllergenReport,
    pub dietary: DietaryReport,
    pub goals: GoalImpact,
    pub health: HealthReport,
    pub analyzed_at: DateTime<Utc>,
}
