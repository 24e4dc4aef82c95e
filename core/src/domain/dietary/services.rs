use std::collections::BTreeSet;

use crate::domain::{
    catalog::{DietCatalog, DietRule, Severity},
    dietary::value_objects::{DietRecommendation, DietViolation, DietWarning, DietaryReport},
    product::entities::{ProductRecord, SearchableIngredients},
};

const VIOLATION_PENALTY: i32 = 30;
const WARNING_PENALTY: i32 = 10;

fn apply_rule(
    rule: &DietRule,
    diet: &str,
    ingredients: &SearchableIngredients,
) -> (Vec<DietViolation>, Vec<DietWarning>) {
    let violations = rule
        .forbidden
        .iter()
        .filter(|term| ingredients.mentions(term))
        .map(|term| DietViolation {
            ingredient: term.clone(),
            reason: format!("Not suitable for {} diet", diet),
            severity: Severity::High,
        })
        .collect();

    let mut warnings: Vec<DietWarning> = rule
        .cautions
        .iter()
        .filter(|phrase| ingredients.text_contains(phrase))
        .map(|phrase| DietWarning {
            message: phrase.clone(),
            reason: format!("May not be suitable for {} diet", diet),
            ingredients: Vec::new(),
            severity: Severity::Medium,
        })
        .collect();

    let high_carb: Vec<String> = rule
        .high_carb
        .iter()
        .filter(|term| ingredients.mentions(term))
        .cloned()
        .collect();
    if !high_carb.is_empty() {
        warnings.push(DietWarning {
            message: "High carbohydrate content".to_string(),
            reason: format!("May not be suitable for {} diet", diet),
            ingredients: high_carb,
            severity: Severity::Medium,
        });
    }

    (violations, warnings)
}

fn recommendation(
    diet: &str,
    violations: &[DietViolation],
    warnings: &[DietWarning],
) -> DietRecommendation {
    if !violations.is_empty() {
        DietRecommendation {
            suitable: false,
            message: format!("This product is NOT suitable for a {} diet", diet),
            details: violations
                .iter()
                .map(|v| v.reason.as_str())
                .collect::<Vec<_>>()
                .join(". "),
        }
    } else if !warnings.is_empty() {
        DietRecommendation {
            suitable: true,
            message: format!("This product may be suitable for a {} diet with caution", diet),
            details: warnings
                .iter()
                .map(|w| w.message.as_str())
                .collect::<Vec<_>>()
                .join(". "),
        }
    } else {
        DietRecommendation {
            suitable: true,
            message: format!("This product appears suitable for a {} diet", diet),
            details: "No dietary violations detected".to_string(),
        }
    }
}

/// Evaluates the product against the diet's rule table. `standard`, and any
/// diet without a rule table, always passes with a score of 100.
pub fn check_diet(
    product: &ProductRecord,
    diet: &str,
    avoided: &BTreeSet<String>,
    catalog: &DietCatalog,
) -> DietaryReport {
    let ingredients = product.searchable_ingredients();

    let (violations, warnings) = match catalog.get(diet) {
        Some(rule) => apply_rule(rule, diet, &ingredients),
        None => (Vec::new(), Vec::new()),
    };

    let avoided_ingredients = avoided
        .iter()
        .filter(|term| ingredients.mentions(term))
        .cloned()
        .collect();

    let penalty =
        VIOLATION_PENALTY * violations.len() as i32 + WARNING_PENALTY * warnings.len() as i32;

    DietaryReport {
        diet: diet.to_string(),
        compatible: violations.is_empty(),
        score: (100 - penalty).clamp(0, 100) as u8,
        recommendation: recommendation(diet, &violations, &warnings),
        violations,
        warnings,
        avoided_ingredients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{catalog::defaults::diet_catalog, product::entities::Ingredient};

    fn product(text: &str, names: &[&str]) -> ProductRecord {
        ProductRecord {
            barcode: "1".to_string(),
            ingredients_text: Some(text.to_string()),
            ingredients: Some(names.iter().map(|n| Ingredient::new(*n)).collect()),
            ..Default::default()
        }
    }

    fn none() -> BTreeSet<String> {
        BTreeSet::new()
    }

    #[test]
    fn standard_diet_always_passes() {
        let report = check_diet(
            &product("pork, milk, sugar, wheat", &["Gelatin"]),
            "standard",
            &none(),
            &diet_catalog(),
        );

        assert!(report.compatible);
        assert_eq!(report.score, 100);
        assert!(report.violations.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(
            report.recommendation.message,
            "This product appears suitable for a standard diet"
        );
    }

    #[test]
    fn vegan_flags_milk() {
        let report = check_diet(
            &product("Wheat flour, sugar, milk powder, salt", &[]),
            "vegan",
            &none(),
            &diet_catalog(),
        );

        assert!(!report.compatible);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].ingredient, "milk");
        assert_eq!(report.violations[0].reason, "Not suitable for vegan diet");
        assert_eq!(report.score, 70);
        assert!(!report.recommendation.suitable);
        assert_eq!(
            report.recommendation.message,
            "This product is NOT suitable for a vegan diet"
        );
        assert_eq!(report.recommendation.details, "Not suitable for vegan diet");
    }

    #[test]
    fn forbidden_terms_match_structured_names() {
        let report = check_diet(
            &product("", &["Beef Stock", "Gelatin"]),
            "vegetarian",
            &none(),
            &diet_catalog(),
        );

        let terms: Vec<_> = report.violations.iter().map(|v| v.ingredient.as_str()).collect();
        assert_eq!(terms, vec!["beef", "gelatin"]);
        assert_eq!(report.score, 40);
        assert_eq!(
            report.recommendation.details,
            "Not suitable for vegetarian diet. Not suitable for vegetarian diet"
        );
    }

    #[test]
    fn cautions_only_match_text() {
        let from_text = check_diet(
            &product("oat flour. May contain milk.", &[]),
            "dairy-free",
            &none(),
            &diet_catalog(),
        );
        assert_eq!(from_text.violations.len(), 1);
        assert_eq!(from_text.warnings.len(), 1);
        assert_eq!(from_text.warnings[0].message, "may contain milk");
        assert_eq!(from_text.score, 60);

        let from_list = check_diet(
            &product("", &["may contain eggs"]),
            "vegan",
            &none(),
            &diet_catalog(),
        );
        assert_eq!(from_list.violations.len(), 1);
        assert_eq!(from_list.violations[0].ingredient, "eggs");
        assert!(from_list.warnings.is_empty());
    }

    #[test]
    fn keto_aggregates_high_carb_terms() {
        let report = check_diet(
            &product("rice, corn syrup", &["Potato starch"]),
            "keto",
            &none(),
            &diet_catalog(),
        );

        assert!(report.compatible);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].message, "High carbohydrate content");
        assert_eq!(report.warnings[0].ingredients, vec!["rice", "potato", "corn"]);
        assert_eq!(report.score, 90);
        assert_eq!(
            report.recommendation.message,
            "This product may be suitable for a keto diet with caution"
        );
        assert_eq!(report.recommendation.details, "High carbohydrate content");
    }

    #[test]
    fn paleo_has_no_rules() {
        let report = check_diet(&product("sugar, bread", &[]), "paleo", &none(), &diet_catalog());
        assert!(report.compatible);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn score_never_goes_below_zero() {
        let report = check_diet(
            &product("meat, beef, pork, chicken, milk", &[]),
            "vegan",
            &none(),
            &diet_catalog(),
        );

        assert_eq!(report.violations.len(), 5);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn avoided_ingredients_are_reported_without_penalty() {
        let avoided = BTreeSet::from(["palm oil".to_string(), "carrageenan".to_string()]);
        let report = check_diet(
            &product("sugar, palm oil", &["Carrageenan"]),
            "standard",
            &avoided,
            &diet_catalog(),
        );

        assert_eq!(report.avoided_ingredients, vec!["carrageenan", "palm oil"]);
        assert!(report.compatible);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn mixed_case_rules_from_a_file_still_match() {
        let mut data = crate::domain::catalog::ReferenceData::builtin();
        data.diets.diets[0].forbidden = vec!["Milk".to_string()];
        let raw = serde_json::to_string(&data).unwrap();
        let data = crate::domain::catalog::ReferenceData::from_json(&raw).unwrap();

        let report = check_diet(&product("milk", &[]), "vegan", &none(), &data.diets);

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].ingredient, "milk");
    }
}
