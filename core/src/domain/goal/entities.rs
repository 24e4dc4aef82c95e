use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    product::{entities::ProductRecord, value_objects::Nutrient},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientGoal {
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
}

impl NutrientGoal {
    pub fn new(target: f64, max: Option<f64>, min: Option<f64>) -> Self {
        Self { target, max, min }
    }

    pub fn validate(&self, nutrient: Nutrient) -> Result<(), CoreError> {
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(CoreError::InvalidGoal(format!(
                "{} target must be a positive number",
                nutrient
            )));
        }
        if let Some(max) = self.max {
            if !max.is_finite() || max < self.target {
                return Err(CoreError::InvalidGoal(format!(
                    "{} max must be at least the target",
                    nutrient
                )));
            }
        }
        if let Some(min) = self.min {
            if !min.is_finite() || min > self.target {
                return Err(CoreError::InvalidGoal(format!(
                    "{} min must not exceed the target",
                    nutrient
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GoalSet {
    pub goals: BTreeMap<Nutrient, NutrientGoal>,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            goals: BTreeMap::from([
                (Nutrient::Calories, NutrientGoal::new(2000.0, Some(2500.0), None)),
                (Nutrient::Sugar, NutrientGoal::new(50.0, Some(75.0), None)),
                (Nutrient::Sodium, NutrientGoal::new(2000.0, Some(2300.0), None)),
                (Nutrient::Protein, NutrientGoal::new(50.0, None, Some(40.0))),
                (Nutrient::Fiber, NutrientGoal::new(25.0, None, Some(20.0))),
                (Nutrient::Fat, NutrientGoal::new(65.0, Some(80.0), None)),
            ]),
        }
    }
}

impl GoalSet {
    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientGoal> {
        self.goals.get(&nutrient)
    }

    /// Replaces one goal. The set is left untouched when the goal is invalid.
    pub fn set(&mut self, nutrient: Nutrient, goal: NutrientGoal) -> Result<(), CoreError> {
        goal.validate(nutrient)?;
        self.goals.insert(nutrient, goal);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NutrientTotals {
    pub calories: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub protein: f64,
    pub fiber: f64,
    pub fat: f64,
}

impl NutrientTotals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::Protein => self.protein,
            Nutrient::Fiber => self.fiber,
            Nutrient::Fat => self.fat,
        }
    }

    fn slot(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Fat => &mut self.fat,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        *self.slot(nutrient) = value;
    }

    pub fn add(&mut self, other: &NutrientTotals) {
        for nutrient in Nutrient::ALL {
            *self.slot(nutrient) += other.get(nutrient);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IntakeEntry {
    pub id: Uuid,
    pub name: String,
    pub barcode: String,
    pub serving_size: f64,
    pub timestamp: DateTime<Utc>,
}

/// Nutrient intake of one calendar day. Only the ledger for today is ever
/// written; earlier days are read-only history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyIntakeLedger {
    pub date: NaiveDate,
    #[serde(default)]
    pub totals: NutrientTotals,
    #[serde(default)]
    pub scanned_products: Vec<IntakeEntry>,
}

impl DailyIntakeLedger {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            totals: NutrientTotals::default(),
            scanned_products: Vec::new(),
        }
    }

    /// Adds an already scaled impact and logs the product.
    pub fn record(
        &mut self,
        product: &ProductRecord,
        serving_size: f64,
        impact: &NutrientTotals,
    ) -> &IntakeEntry {
        let (now, timestamp) = generate_timestamp();

        self.totals.add(impact);
        self.scanned_products.push(IntakeEntry {
            id: Uuid::new_v7(timestamp),
            name: product.name.clone(),
            barcode: product.barcode.clone(),
            serving_size,
            timestamp: now,
        });

        &self.scanned_products[self.scanned_products.len() - 1]
    }

    pub fn scanned_count(&self) -> usize {
        self.scanned_products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_goals_are_valid() {
        let goals = GoalSet::default();
        assert_eq!(goals.goals.len(), 6);
        for (nutrient, goal) in &goals.goals {
            assert!(goal.validate(*nutrient).is_ok());
        }
    }

    #[test]
    fn rejects_max_below_target() {
        let mut goals = GoalSet::default();
        let result = goals.set(Nutrient::Sugar, NutrientGoal::new(60.0, Some(40.0), None));

        assert!(matches!(result, Err(CoreError::InvalidGoal(_))));
        assert_eq!(goals.get(Nutrient::Sugar).unwrap().target, 50.0);
    }

    #[test]
    fn rejects_min_above_target_and_zero_target() {
        assert!(NutrientGoal::new(50.0, None, Some(60.0))
            .validate(Nutrient::Protein)
            .is_err());
        assert!(NutrientGoal::new(0.0, None, None)
            .validate(Nutrient::Fiber)
            .is_err());
        assert!(NutrientGoal::new(50.0, Some(50.0), Some(50.0))
            .validate(Nutrient::Fat)
            .is_ok());
    }

    #[test]
    fn record_accumulates_totals_and_entries() {
        let mut ledger = DailyIntakeLedger::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let product = ProductRecord {
            barcode: "42".to_string(),
            name: "Granola".to_string(),
            ..Default::default()
        };
        let impact = NutrientTotals {
            calories: 120.0,
            sugar: 6.0,
            ..Default::default()
        };

        ledger.record(&product, 30.0, &impact);
        let entry = ledger.record(&product, 30.0, &impact).clone();

        assert_eq!(ledger.totals.calories, 240.0);
        assert_eq!(ledger.totals.sugar, 12.0);
        assert_eq!(ledger.scanned_count(), 2);
        assert_eq!(entry.barcode, "42");
        assert_eq!(entry.serving_size, 30.0);
    }

    #[test]
    fn ledger_tolerates_missing_fields() {
        let ledger: DailyIntakeLedger =
            serde_json::from_str(r#"{"date":"2024-03-01","totals":{"sugar":3.5}}"#).unwrap();

        assert_eq!(ledger.totals.sugar, 3.5);
        assert_eq!(ledger.totals.calories, 0.0);
        assert!(ledger.scanned_products.is_empty());
    }
}
