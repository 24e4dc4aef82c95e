use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::IngredientQualityCatalog,
    product::{
        entities::{Ingredient, ProductRecord},
        value_objects::NutritionValue,
    },
};

const MAX_INGREDIENTS: usize = 15;

static TRAILING_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[()%\d\s]+$").unwrap());
static INGREDIENT_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;]").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OpenFoodFactsIngredient {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// The subset of an Open Food Facts `product` object the analyzers use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OpenFoodFactsProduct {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_name_en: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<OpenFoodFactsIngredient>,
    #[serde(default)]
    pub nutriments: BTreeMap<String, NutritionValue>,
    #[serde(default)]
    pub nutriscore_grade: Option<String>,
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_front_url: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl OpenFoodFactsProduct {
    pub fn into_record(self, barcode: &str, quality: &IngredientQualityCatalog) -> ProductRecord {
        let ingredients = derive_ingredients(
            self.ingredients_text.as_deref().unwrap_or_default(),
            &self.ingredients,
            quality,
        );

        ProductRecord {
            barcode: barcode.to_string(),
            name: non_empty(&self.product_name)
                .or(non_empty(&self.product_name_en))
                .unwrap_or("Unknown Product")
                .to_string(),
            brand: non_empty(&self.brands)
                .unwrap_or("Unknown Brand")
                .to_string(),
            ingredients_text: non_empty(&self.ingredients_text).map(str::to_string),
            ingredients: (!ingredients.is_empty()).then_some(ingredients),
            nutrition: (!self.nutriments.is_empty()).then_some(self.nutriments),
            nutri_score: non_empty(&self.nutriscore_grade).map(str::to_uppercase),
            allergens: non_empty(&self.allergens).map(str::to_string),
            image: non_empty(&self.image_url)
                .or(non_empty(&self.image_front_url))
                .map(str::to_string),
        }
    }
}

/// Builds tagged ingredients from the structured payload list, or from the
/// free text split on `,`/`;` when the list is empty. At most 15 are kept.
pub fn derive_ingredients(
    text: &str,
    structured: &[OpenFoodFactsIngredient],
    quality: &IngredientQualityCatalog,
) -> Vec<Ingredient> {
    let raw: Vec<String> = if !structured.is_empty() {
        structured
            .iter()
            .filter_map(|ing| non_empty(&ing.text).or(non_empty(&ing.id)))
            .map(str::to_string)
            .take(MAX_INGREDIENTS)
            .collect()
    } else {
        INGREDIENT_SEPARATOR
            .split(text)
            .map(str::trim)
            .filter(|ing| !ing.is_empty())
            .map(str::to_string)
            .take(MAX_INGREDIENTS)
            .collect()
    };

    raw.iter()
        .map(|ingredient| {
            let clean = TRAILING_NOISE.replace(ingredient, "").trim().to_string();
            Ingredient {
                status: Some(quality.classify(&clean)),
                description: Some(quality.describe(&clean).to_string()),
                name: clean,
            }
        })
        .collect()
}
