use std::collections::BTreeSet;

use crate::domain::{
    allergen::value_objects::{AllergenMatch, AllergenReport, AllergenWarning, WarningLevel},
    catalog::{AllergenCatalog, AllergenRule, Severity},
    product::entities::ProductRecord,
};

const HIGH_SEVERITY_PENALTY: i32 = 40;
const MEDIUM_SEVERITY_PENALTY: i32 = 20;

fn match_rule(
    rule: &AllergenRule,
    text: &str,
    tags: &[String],
    user_allergens: &BTreeSet<String>,
) -> Option<AllergenMatch> {
    let matched_keywords: Vec<String> = rule
        .keywords
        .iter()
        .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
        .cloned()
        .collect();
    let tagged = tags.iter().any(|tag| tag.contains(rule.name.as_str()));

    if matched_keywords.is_empty() && !tagged {
        return None;
    }

    Some(AllergenMatch {
        name: rule.name.clone(),
        severity: rule.severity,
        description: rule.description.clone(),
        matched_keywords,
        is_user_allergen: user_allergens.contains(&rule.name),
    })
}

fn safety_score(user_matches: &[AllergenMatch]) -> u8 {
    let penalty: i32 = user_matches
        .iter()
        .map(|m| match m.severity {
            Severity::High => HIGH_SEVERITY_PENALTY,
            Severity::Medium => MEDIUM_SEVERITY_PENALTY,
        })
        .sum();

    (100 - penalty).clamp(0, 100) as u8
}

fn warning(user_matches: &[AllergenMatch]) -> AllergenWarning {
    if user_matches.is_empty() {
        return AllergenWarning {
            level: WarningLevel::Safe,
            message: "No known allergens detected for your profile".to_string(),
            action: "Safe to consume based on allergen profile".to_string(),
            details: Vec::new(),
        };
    }

    let names = user_matches
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let level = if user_matches.iter().any(|m| m.severity == Severity::High) {
        WarningLevel::Danger
    } else {
        WarningLevel::Warning
    };

    AllergenWarning {
        level,
        message: format!("ALLERGEN ALERT: Contains {}", names),
        action: "DO NOT CONSUME - This product contains allergens you have marked".to_string(),
        details: user_matches.iter().map(|m| m.description.clone()).collect(),
    }
}

/// Matches every catalog category against the ingredient text (keyword
/// containment) and the allergen tags (category name containment), in
/// catalog order.
pub fn detect_allergens(
    product: &ProductRecord,
    user_allergens: &BTreeSet<String>,
    catalog: &AllergenCatalog,
) -> AllergenReport {
    let text = product.ingredients_text_lowercase();
    let tags = product.allergen_tags();

    let all_allergens: Vec<AllergenMatch> = catalog
        .allergens
        .iter()
        .filter_map(|rule| match_rule(rule, &text, &tags, user_allergens))
        .collect();
    let user_allergens: Vec<AllergenMatch> = all_allergens
        .iter()
        .filter(|m| m.is_user_allergen)
        .cloned()
        .collect();

    AllergenReport {
        has_allergens: !all_allergens.is_empty(),
        has_user_allergens: !user_allergens.is_empty(),
        safety_score: safety_score(&user_allergens),
        warning: warning(&user_allergens),
        all_allergens,
        user_allergens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::defaults::allergen_catalog;

    fn product(text: &str, tags: Option<&str>) -> ProductRecord {
        ProductRecord {
            barcode: "1".to_string(),
            ingredients_text: Some(text.to_string()),
            allergens: tags.map(str::to_string),
            ..Default::default()
        }
    }

    fn user(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn milk_and_wheat_for_a_milk_allergic_user() {
        let report = detect_allergens(
            &product("Wheat flour, sugar, milk powder, salt", None),
            &user(&["milk"]),
            &allergen_catalog(),
        );

        let names: Vec<_> = report.all_allergens.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["milk", "wheat"]);
        assert_eq!(report.all_allergens[0].matched_keywords, vec!["milk"]);
        assert_eq!(
            report.all_allergens[1].matched_keywords,
            vec!["wheat", "wheat flour"]
        );
        assert!(report.has_user_allergens);
        assert_eq!(report.user_allergens.len(), 1);
        assert_eq!(report.safety_score, 60);
        assert_eq!(report.warning.level, WarningLevel::Danger);
        assert_eq!(report.warning.message, "ALLERGEN ALERT: Contains milk");
        assert_eq!(report.warning.details, vec!["Contains milk or dairy products"]);
    }

    #[test]
    fn tags_alone_detect_a_category() {
        let report = detect_allergens(
            &product("cocoa, sugar", Some("en:Sesame-seeds, en:soybeans")),
            &user(&["sesame"]),
            &allergen_catalog(),
        );

        let names: Vec<_> = report.all_allergens.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["soybeans", "sesame"]);
        assert!(report.all_allergens[1].matched_keywords.is_empty());
        assert_eq!(report.safety_score, 80);
        assert_eq!(report.warning.level, WarningLevel::Warning);
    }

    #[test]
    fn no_user_match_is_safe() {
        let report = detect_allergens(
            &product("peanuts, salt", None),
            &user(&["fish"]),
            &allergen_catalog(),
        );

        assert!(report.has_allergens);
        assert!(!report.has_user_allergens);
        assert_eq!(report.safety_score, 100);
        assert_eq!(report.warning.level, WarningLevel::Safe);
        assert!(report.warning.details.is_empty());
    }

    #[test]
    fn score_floors_at_zero() {
        let report = detect_allergens(
            &product("milk, egg, cod, shrimp, peanut", None),
            &user(&["milk", "eggs", "fish", "shellfish", "peanuts"]),
            &allergen_catalog(),
        );

        assert_eq!(report.user_allergens.len(), 5);
        assert_eq!(report.safety_score, 0);
    }

    #[test]
    fn empty_product_detects_nothing() {
        let report = detect_allergens(
            &ProductRecord::default(),
            &user(&["milk"]),
            &allergen_catalog(),
        );

        assert!(!report.has_allergens);
        assert_eq!(report.safety_score, 100);
    }
}
