use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::value_objects::{Nutrient, NutritionValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    Good,
    Bad,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub status: Option<IngredientStatus>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
            description: None,
        }
    }

    pub fn with_status(mut self, status: IngredientStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Product as handed over by the lookup collaborator. Every field other than
/// the barcode may be missing; analyzers treat absence as "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    pub barcode: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
    /// Values per 100 g, keyed the way Open Food Facts names its nutriments.
    #[serde(default)]
    pub nutrition: Option<BTreeMap<String, NutritionValue>>,
    #[serde(default)]
    pub nutri_score: Option<String>,
    /// Raw comma-separated allergen tags, e.g. `"en:milk,en:gluten"`.
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductRecord {
    pub fn ingredients_text_lowercase(&self) -> String {
        self.ingredients_text
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn ingredient_names_lowercase(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .flatten()
            .map(|ingredient| ingredient.name.to_lowercase())
            .collect()
    }

    pub fn allergen_tags(&self) -> Vec<String> {
        self.allergens
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    pub fn nutrient_value(&self, nutrient: Nutrient) -> Option<&NutritionValue> {
        let nutrition = self.nutrition.as_ref()?;
        nutrient.keys().iter().find_map(|key| nutrition.get(*key))
    }

    pub fn searchable_ingredients(&self) -> SearchableIngredients {
        SearchableIngredients {
            text: self.ingredients_text_lowercase(),
            names: self.ingredient_names_lowercase(),
        }
    }
}

/// Lowercased ingredient text and structured names, built once per analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchableIngredients {
    pub text: String,
    pub names: Vec<String>,
}

impl SearchableIngredients {
    /// `term` must already be lowercase.
    pub fn text_contains(&self, term: &str) -> bool {
        self.text.contains(term)
    }

    /// Text or any structured ingredient name contains `term`.
    pub fn mentions(&self, term: &str) -> bool {
        self.text_contains(term) || self.names.iter().any(|name| name.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductRecord {
        ProductRecord {
            barcode: "3017620422003".to_string(),
            name: "Spread".to_string(),
            ingredients_text: Some("Sugar, Palm Oil, HAZELNUTS 13%".to_string()),
            ingredients: Some(vec![Ingredient::new("Sugar"), Ingredient::new("Palm Oil")]),
            allergens: Some("en:milk, en:nuts,,".to_string()),
            nutrition: Some(BTreeMap::from([
                ("energy".to_string(), NutritionValue::Number(2252.0)),
                ("energy-kcal".to_string(), NutritionValue::Number(539.0)),
            ])),
            ..Default::default()
        }
    }

    #[test]
    fn lowercases_text_and_names() {
        let product = product();
        assert_eq!(
            product.ingredients_text_lowercase(),
            "sugar, palm oil, hazelnuts 13%"
        );
        assert_eq!(product.ingredient_names_lowercase(), vec!["sugar", "palm oil"]);
    }

    #[test]
    fn splits_allergen_tags() {
        assert_eq!(product().allergen_tags(), vec!["en:milk", "en:nuts"]);
        assert!(ProductRecord::default().allergen_tags().is_empty());
    }

    #[test]
    fn prefers_energy_kcal_over_energy() {
        assert_eq!(
            product().nutrient_value(Nutrient::Calories),
            Some(&NutritionValue::Number(539.0))
        );
        assert_eq!(product().nutrient_value(Nutrient::Fat), None);
    }

    #[test]
    fn deserializes_sparse_record() {
        let product: ProductRecord = serde_json::from_str(r#"{"barcode":"123"}"#).unwrap();
        assert_eq!(product.barcode, "123");
        assert!(product.ingredients.is_none());
        assert!(product.nutrition.is_none());
    }
}
