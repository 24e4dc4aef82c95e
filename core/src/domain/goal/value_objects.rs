use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::Severity,
    goal::entities::NutrientTotals,
    product::{entities::ProductRecord, value_objects::Nutrient},
};

pub const DEFAULT_SERVING_SIZE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RemainingAllowance {
    /// Projected running total once the product is eaten.
    pub current: f64,
    pub target: f64,
    pub max: Option<f64>,
    pub remaining: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GoalWarning {
    pub nutrient: Nutrient,
    pub message: String,
    pub severity: Severity,
}

/// Forecast of what logging a product would do to today's totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GoalImpact {
    pub serving_size: f64,
    pub impact: NutrientTotals,
    pub remaining: BTreeMap<Nutrient, RemainingAllowance>,
    pub percent_of_goal: BTreeMap<Nutrient, f64>,
    pub warnings: Vec<GoalWarning>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    Exceeded,
    OverTarget,
    UnderTarget,
    OnTrack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientProgress {
    pub current: f64,
    pub target: f64,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub percentage: f64,
    pub remaining: Option<f64>,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub nutrients: BTreeMap<Nutrient, NutrientProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayStats {
    pub date: NaiveDate,
    pub totals: NutrientTotals,
    pub scanned_count: usize,
}

#[derive(Debug, Clone)]
pub struct IntakeInput {
    pub product: ProductRecord,
    pub serving_size: f64,
}
