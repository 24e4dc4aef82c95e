use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::{AllergenCatalog, DietCatalog, STANDARD_DIET},
    common::{entities::app_errors::CoreError, generate_timestamp},
};

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub diet: String,
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    #[serde(default)]
    pub avoided_ingredients: BTreeSet<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            diet: STANDARD_DIET.to_string(),
            allergens: BTreeSet::new(),
            avoided_ingredients: BTreeSet::new(),
            updated_at: None,
        }
    }
}

impl UserProfile {
    fn touch(&mut self) {
        let (now, _) = generate_timestamp();
        self.updated_at = Some(now);
    }

    pub fn set_diet(&mut self, diet: &str, catalog: &DietCatalog) -> Result<(), CoreError> {
        let diet = normalize(diet);
        if !catalog.is_known(&diet) {
            return Err(CoreError::UnknownDiet(diet));
        }

        self.diet = diet;
        self.touch();
        Ok(())
    }

    /// Returns whether the allergen was newly added.
    pub fn add_allergen(&mut self, name: &str, catalog: &AllergenCatalog) -> Result<bool, CoreError> {
        let name = normalize(name);
        if !catalog.contains(&name) {
            return Err(CoreError::UnknownAllergen(name));
        }

        let added = self.allergens.insert(name);
        if added {
            self.touch();
        }
        Ok(added)
    }

    /// Removal is not checked against the catalog so that names dropped from
    /// a newer reference data file can still be cleared.
    pub fn remove_allergen(&mut self, name: &str) -> bool {
        let removed = self.allergens.remove(&normalize(name));
        if removed {
            self.touch();
        }
        removed
    }

    /// Replaces the whole set. Nothing changes if any name is unknown.
    pub fn set_allergens(
        &mut self,
        names: &[String],
        catalog: &AllergenCatalog,
    ) -> Result<(), CoreError> {
        let allergens = names
            .iter()
            .map(|name| {
                let name = normalize(name);
                if catalog.contains(&name) {
                    Ok(name)
                } else {
                    Err(CoreError::UnknownAllergen(name))
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        self.allergens = allergens;
        self.touch();
        Ok(())
    }

    pub fn add_avoided_ingredient(&mut self, term: &str) -> Result<bool, CoreError> {
        let term = normalize(term);
        if term.is_empty() {
            return Err(CoreError::InvalidIngredient(
                "avoided ingredient cannot be empty".to_string(),
            ));
        }

        let added = self.avoided_ingredients.insert(term);
        if added {
            self.touch();
        }
        Ok(added)
    }

    pub fn remove_avoided_ingredient(&mut self, term: &str) -> bool {
        let removed = self.avoided_ingredients.remove(&normalize(term));
        if removed {
            self.touch();
        }
        removed
    }
}
