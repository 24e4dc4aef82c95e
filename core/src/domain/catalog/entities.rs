use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::defaults, common::entities::app_errors::CoreError, goal::entities::GoalSet,
    product::entities::IngredientStatus,
};

/// Diet identifier that carries no rules and always passes.
pub const STANDARD_DIET: &str = "standard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenRule {
    pub name: String,
    pub keywords: Vec<String>,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenCatalog {
    pub allergens: Vec<AllergenRule>,
}

impl AllergenCatalog {
    pub fn get(&self, name: &str) -> Option<&AllergenRule> {
        self.allergens.iter().find(|rule| rule.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.allergens.iter().map(|rule| rule.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietRule {
    pub name: String,
    #[serde(default)]
    pub forbidden: Vec<String>,
    /// Phrases only ever matched against the free-text ingredient string.
    #[serde(default)]
    pub cautions: Vec<String>,
    #[serde(default)]
    pub high_carb: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietCatalog {
    pub diets: Vec<DietRule>,
}

impl DietCatalog {
    pub fn get(&self, name: &str) -> Option<&DietRule> {
        self.diets.iter().find(|rule| rule.name == name)
    }

    pub fn is_known(&self, name: &str) -> bool {
        name == STANDARD_DIET || self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        std::iter::once(STANDARD_DIET)
            .chain(self.diets.iter().map(|rule| rule.name.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDescriptor {
    pub term: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientQualityCatalog {
    pub good: Vec<String>,
    pub bad: Vec<String>,
    pub descriptions: Vec<IngredientDescriptor>,
}

impl IngredientQualityCatalog {
    /// Bad terms win over good ones: "partially hydrogenated oil" is bad even
    /// though it contains "oil".
    pub fn classify(&self, ingredient: &str) -> IngredientStatus {
        let ingredient = ingredient.to_lowercase();

        if self.bad.iter().any(|term| ingredient.contains(term.as_str())) {
            IngredientStatus::Bad
        } else if self.good.iter().any(|term| ingredient.contains(term.as_str())) {
            IngredientStatus::Good
        } else {
            IngredientStatus::Neutral
        }
    }

    pub fn describe(&self, ingredient: &str) -> &str {
        let ingredient = ingredient.to_lowercase();

        self.descriptions
            .iter()
            .find(|d| ingredient.contains(d.term.as_str()))
            .map(|d| d.description.as_str())
            .unwrap_or("Common food ingredient")
    }
}

/// Immutable rule tables and defaults, loaded once at startup and shared by
/// reference with every analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceData {
    pub version: String,
    pub allergens: AllergenCatalog,
    pub diets: DietCatalog,
    pub ingredient_quality: IngredientQualityCatalog,
    pub default_goals: GoalSet,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            version: defaults::REFERENCE_DATA_VERSION.to_string(),
            allergens: defaults::allergen_catalog(),
            diets: defaults::diet_catalog(),
            ingredient_quality: defaults::ingredient_quality_catalog(),
            default_goals: GoalSet::default(),
        }
    }

    /// Parses a reference file. Names and match terms are trimmed and
    /// lowercased before validation, since every matcher compares against
    /// lowercased product text.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let mut data: ReferenceData = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidReferenceData(e.to_string()))?;
        data.normalize();
        data.validate()?;

        Ok(data)
    }

    fn normalize(&mut self) {
        for rule in &mut self.allergens.allergens {
            normalize_term(&mut rule.name);
            rule.keywords.iter_mut().for_each(normalize_term);
        }
        for rule in &mut self.diets.diets {
            normalize_term(&mut rule.name);
            rule.forbidden
                .iter_mut()
                .chain(rule.cautions.iter_mut())
                .chain(rule.high_carb.iter_mut())
                .for_each(normalize_term);
        }
        let quality = &mut self.ingredient_quality;
        quality
            .good
            .iter_mut()
            .chain(quality.bad.iter_mut())
            .chain(quality.descriptions.iter_mut().map(|d| &mut d.term))
            .for_each(normalize_term);
    }

    fn terms(&self) -> impl Iterator<Item = &str> {
        let allergens = self
            .allergens
            .allergens
            .iter()
            .flat_map(|rule| std::iter::once(&rule.name).chain(&rule.keywords));
        let diets = self.diets.diets.iter().flat_map(|rule| {
            std::iter::once(&rule.name)
                .chain(&rule.forbidden)
                .chain(&rule.cautions)
                .chain(&rule.high_carb)
        });
        let quality = &self.ingredient_quality;
        let quality = quality
            .good
            .iter()
            .chain(&quality.bad)
            .chain(quality.descriptions.iter().map(|d| &d.term));

        allergens.chain(diets).chain(quality).map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        // An empty term matches every product.
        if let Some(term) = self.terms().find(|term| !is_normalized(term)) {
            return Err(CoreError::InvalidReferenceData(format!(
                "term '{}' must be non-empty, trimmed and lowercase",
                term
            )));
        }

        let mut seen = HashSet::new();
        for rule in &self.allergens.allergens {
            if rule.keywords.is_empty() {
                return Err(CoreError::InvalidReferenceData(format!(
                    "allergen '{}' needs at least one keyword",
                    rule.name
                )));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(CoreError::InvalidReferenceData(format!(
                    "duplicate allergen '{}'",
                    rule.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for rule in &self.diets.diets {
            if rule.name == STANDARD_DIET {
                return Err(CoreError::InvalidReferenceData(
                    "the standard diet cannot carry rules".to_string(),
                ));
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(CoreError::InvalidReferenceData(format!(
                    "duplicate diet '{}'",
                    rule.name
                )));
            }
        }

        for (nutrient, goal) in &self.default_goals.goals {
            goal.validate(*nutrient)
                .map_err(|e| CoreError::InvalidReferenceData(e.to_string()))?;
        }

        Ok(())
    }
}

fn normalize_term(term: &mut String) {
    *term = term.trim().to_lowercase();
}

fn is_normalized(term: &str) -> bool {
    !term.is_empty() && term.trim() == term && term.to_lowercase() == term
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
