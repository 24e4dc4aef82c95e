use crate::domain::{
    health_score::value_objects::{HealthFactor, HealthReport},
    product::{
        entities::{IngredientStatus, ProductRecord},
        value_objects::Nutrient,
    },
};

const BASELINE: i32 = 50;

fn grade_delta(grade: &str) -> i32 {
    match grade.trim().to_uppercase().as_str() {
        "A" => 40,
        "B" => 25,
        "C" => 10,
        "D" => -10,
        "E" => -30,
        _ => 0,
    }
}

fn grams(product: &ProductRecord, nutrient: Nutrient) -> Option<f64> {
    product.nutrient_value(nutrient)?.as_number()
}

fn nutrition_factors(product: &ProductRecord) -> Vec<HealthFactor> {
    let mut factors = Vec::new();

    if let Some(sugar) = grams(product, Nutrient::Sugar) {
        if sugar < 5.0 {
            factors.push(HealthFactor::new("Low Sugar", 10, format!("{}g", sugar)));
        } else if sugar > 15.0 {
            factors.push(HealthFactor::new("High Sugar", -15, format!("{}g", sugar)));
        }
    }

    if let Some(sodium) = product
        .nutrient_value(Nutrient::Sodium)
        .and_then(|value| value.as_milligrams())
    {
        if sodium < 300.0 {
            factors.push(HealthFactor::new("Low Sodium", 10, format!("{}mg", sodium)));
        } else if sodium > 800.0 {
            factors.push(HealthFactor::new("High Sodium", -10, format!("{}mg", sodium)));
        }
    }

    if let Some(fat) = grams(product, Nutrient::Fat) {
        if fat > 30.0 {
            factors.push(HealthFactor::new("High Fat", -10, format!("{}g", fat)));
        }
    }

    if let Some(fiber) = grams(product, Nutrient::Fiber) {
        if fiber > 5.0 {
            factors.push(HealthFactor::new("Good Fiber", 5, format!("{}g", fiber)));
        }
    }

    if let Some(protein) = grams(product, Nutrient::Protein) {
        if protein > 10.0 {
            factors.push(HealthFactor::new("High Protein", 5, format!("{}g", protein)));
        }
    }

    factors
}

fn ingredient_factor(product: &ProductRecord) -> Option<HealthFactor> {
    let ingredients = product.ingredients.as_ref()?;
    if ingredients.iter().all(|i| i.status.is_none()) {
        return None;
    }

    let count = |status| ingredients.iter().filter(|i| i.status == Some(status)).count();
    let good = count(IngredientStatus::Good);
    let bad = count(IngredientStatus::Bad);

    Some(HealthFactor::new(
        "Ingredient Quality",
        good as i32 * 2 - bad as i32 * 5,
        format!("{} good, {} concerning", good, bad),
    ))
}

fn describe(score: u8) -> (&'static str, &'static str) {
    match score {
        80.. => (
            "Excellent nutritional profile with beneficial ingredients and balanced nutrition.",
            "Great choice! This product aligns well with a healthy diet.",
        ),
        60..=79 => (
            "Good nutritional profile suitable for regular consumption.",
            "Good option. Enjoy in moderation as part of a balanced diet.",
        ),
        40..=59 => (
            "Moderate nutritional profile. Consider portion sizes and consumption frequency.",
            "Moderate choice. Balance with healthier options throughout the day.",
        ),
        _ => (
            "Lower nutritional profile. Best consumed occasionally as part of a balanced diet.",
            "Consider healthier alternatives or limit consumption frequency.",
        ),
    }
}

/// Scores the product from a baseline of 50 using its grade, per-100 g
/// nutrition and structured ingredient tags. Values that cannot be parsed
/// are skipped.
pub fn score_product(product: &ProductRecord) -> HealthReport {
    let mut factors = Vec::new();

    if let Some(grade) = product.nutri_score.as_deref().filter(|g| !g.trim().is_empty()) {
        factors.push(HealthFactor::new(
            "Nutri-Score",
            grade_delta(grade),
            grade.trim().to_uppercase(),
        ));
    }
    factors.extend(nutrition_factors(product));
    factors.extend(ingredient_factor(product));

    let total = BASELINE + factors.iter().map(|f| f.impact).sum::<i32>();
    let score = total.clamp(0, 100) as u8;
    let (description, recommendation) = describe(score);

    HealthReport {
        score,
        factors,
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::product::{entities::Ingredient, value_objects::NutritionValue};

    fn graded(grade: &str) -> ProductRecord {
        ProductRecord {
            barcode: "1".to_string(),
            nutri_score: Some(grade.to_string()),
            ..Default::default()
        }
    }

    fn with_nutrition(values: &[(&str, NutritionValue)]) -> ProductRecord {
        ProductRecord {
            barcode: "2".to_string(),
            nutrition: Some(
                values
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect::<BTreeMap<_, _>>(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn grade_a_alone_scores_ninety() {
        let report = score_product(&graded("a"));
        assert_eq!(report.score, 90);
        assert_eq!(report.factors, vec![HealthFactor::new("Nutri-Score", 40, "A")]);
        assert_eq!(
            report.recommendation,
            "Great choice! This product aligns well with a healthy diet."
        );
    }

    #[test]
    fn grade_e_alone_scores_twenty() {
        let report = score_product(&graded("E"));
        assert_eq!(report.score, 20);
        assert_eq!(
            report.description,
            "Lower nutritional profile. Best consumed occasionally as part of a balanced diet."
        );
    }

    #[test]
    fn unknown_grade_contributes_nothing() {
        let report = score_product(&graded("unknown"));
        assert_eq!(report.score, 50);
        assert_eq!(report.factors[0].impact, 0);
    }

    #[test]
    fn sugary_salty_product_scores_twenty_five() {
        let report = score_product(&with_nutrition(&[
            ("sugars", NutritionValue::Number(20.0)),
            ("sodium", NutritionValue::Number(0.9)),
            ("fat", NutritionValue::Number(10.0)),
        ]));

        assert_eq!(report.score, 25);
        let names: Vec<_> = report.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["High Sugar", "High Sodium"]);
        assert_eq!(report.factors[0].value, "20g");
        assert_eq!(report.factors[1].value, "900mg");
    }

    #[test]
    fn sodium_text_in_milligrams_is_not_rescaled() {
        let report = score_product(&with_nutrition(&[("sodium", NutritionValue::from("120 mg"))]));
        assert_eq!(report.factors, vec![HealthFactor::new("Low Sodium", 10, "120mg")]);
        assert_eq!(report.score, 60);
    }

    #[test]
    fn unparsable_values_are_not_evaluated() {
        let report = score_product(&with_nutrition(&[
            ("sugars", NutritionValue::from("trace")),
            ("fat", NutritionValue::from("")),
        ]));
        assert!(report.factors.is_empty());
        assert_eq!(report.score, 50);
    }

    #[test]
    fn healthy_product_clamps_at_one_hundred() {
        let mut product = with_nutrition(&[
            ("sugars", NutritionValue::Number(1.0)),
            ("sodium", NutritionValue::Number(0.01)),
            ("fiber", NutritionValue::Number(9.0)),
            ("proteins", NutritionValue::Number(14.0)),
        ]);
        product.nutri_score = Some("A".to_string());

        let report = score_product(&product);
        assert_eq!(report.score, 100);
        assert_eq!(report.factors.len(), 5);
    }

    #[test]
    fn ingredient_quality_counts_tags() {
        let product = ProductRecord {
            barcode: "3".to_string(),
            ingredients: Some(vec![
                Ingredient::new("whole grain oats").with_status(IngredientStatus::Good),
                Ingredient::new("olive oil").with_status(IngredientStatus::Good),
                Ingredient::new("hydrogenated fat").with_status(IngredientStatus::Bad),
                Ingredient::new("salt").with_status(IngredientStatus::Neutral),
            ]),
            ..Default::default()
        };

        let report = score_product(&product);
        assert_eq!(
            report.factors,
            vec![HealthFactor::new("Ingredient Quality", -1, "2 good, 1 concerning")]
        );
        assert_eq!(report.score, 49);
    }

    #[test]
    fn untagged_ingredients_are_ignored() {
        let product = ProductRecord {
            barcode: "4".to_string(),
            ingredients: Some(vec![Ingredient::new("water")]),
            ..Default::default()
        };
        assert!(score_product(&product).factors.is_empty());
    }

    #[test]
    fn severe_product_clamps_at_zero() {
        let mut product = with_nutrition(&[
            ("sugars", NutritionValue::Number(40.0)),
            ("sodium", NutritionValue::Number(2.0)),
            ("fat", NutritionValue::Number(35.0)),
        ]);
        product.nutri_score = Some("E".to_string());

        assert_eq!(score_product(&product).score, 0);
    }
}
