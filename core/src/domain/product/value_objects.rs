use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

// ASCII classes: `\d` would also keep non-ASCII digits that `f64` cannot parse.
static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());
static LEADING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)").unwrap());

/// A nutrition fact as delivered by the lookup collaborator: either a plain
/// number or a labelled string such as `"12.5 g"` or `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NutritionValue {
    Number(f64),
    Text(String),
}

impl NutritionValue {
    /// Numeric reading of the value. Text keeps only digits and dots, then
    /// the leading decimal is parsed; anything else yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NutritionValue::Number(n) if n.is_finite() => Some(*n),
            NutritionValue::Number(_) => None,
            NutritionValue::Text(text) => parse_leading_decimal(text),
        }
    }

    /// Sodium in milligrams. Numbers and unit-less text are grams; text
    /// ending in `mg` is taken as already being milligrams.
    pub fn as_milligrams(&self) -> Option<f64> {
        let value = self.as_number()?;
        match self {
            NutritionValue::Text(text) if text.trim().to_lowercase().ends_with("mg") => {
                Some(value)
            }
            _ => Some(value * 1000.0),
        }
    }
}

impl From<f64> for NutritionValue {
    fn from(value: f64) -> Self {
        NutritionValue::Number(value)
    }
}

impl From<&str> for NutritionValue {
    fn from(value: &str) -> Self {
        NutritionValue::Text(value.to_string())
    }
}

fn parse_leading_decimal(text: &str) -> Option<f64> {
    let digits = NON_NUMERIC.replace_all(text, "");
    LEADING_DECIMAL
        .captures(&digits)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Sugar,
    Sodium,
    Protein,
    Fiber,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Calories,
        Nutrient::Sugar,
        Nutrient::Sodium,
        Nutrient::Protein,
        Nutrient::Fiber,
        Nutrient::Fat,
    ];

    /// Nutrition-map keys consulted in order; the first present one wins.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Nutrient::Calories => &["energy-kcal", "energy"],
            Nutrient::Sugar => &["sugars"],
            Nutrient::Sodium => &["sodium"],
            Nutrient::Protein => &["proteins"],
            Nutrient::Fiber => &["fiber"],
            Nutrient::Fat => &["fat"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Sugar => "sugar",
            Nutrient::Sodium => "sodium",
            Nutrient::Protein => "protein",
            Nutrient::Fiber => "fiber",
            Nutrient::Fat => "fat",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nutrient {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Nutrient::ALL
            .into_iter()
            .find(|n| n.as_str() == name)
            .ok_or_else(|| CoreError::InvalidGoal(format!("unknown nutrient '{}'", s)))
    }
}
