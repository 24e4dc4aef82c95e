use tracing::{debug, instrument};

use crate::domain::{
    allergen::detect_allergens,
    analysis::{
        entities::{AnalysisContext, AnalysisVerdict},
        ports::AnalysisService,
        value_objects::{AnalyzeOpenFoodFactsInput, AnalyzeProductInput},
    },
    catalog::ReferenceData,
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service, today},
    dietary::check_diet,
    goal::{
        helpers::{project_impact, validate_serving_size},
        ports::{GoalRepository, IntakeLedgerRepository},
    },
    health_score::score_product,
    history::ports::HistoryRepository,
    product::entities::ProductRecord,
    profile::ports::ProfileRepository,
};

/// Runs the four analyzers against one snapshot. Goal impact is projected,
/// never committed.
pub fn analyze(
    product: &ProductRecord,
    serving_size: f64,
    context: &AnalysisContext,
    reference_data: &ReferenceData,
) -> Result<AnalysisVerdict, CoreError> {
    let serving_size = validate_serving_size(serving_size)?;
    let (analyzed_at, _) = generate_timestamp();

    Ok(AnalysisVerdict {
        barcode: product.barcode.clone(),
        product_name: product.name.clone(),
        serving_size,
        allergens: detect_allergens(
            product,
            &context.profile.allergens,
            &reference_data.allergens,
        ),
        dietary: check_diet(
            product,
            &context.profile.diet,
            &context.profile.avoided_ingredients,
            &reference_data.diets,
        ),
        goals: project_impact(product, serving_size, &context.goals, &context.ledger),
        health: score_product(product),
        analyzed_at,
    })
}

impl<P, G, L, H> Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    pub(crate) async fn load_context(&self) -> AnalysisContext {
        AnalysisContext {
            profile: self.load_profile().await,
            goals: self.load_goals().await,
            ledger: self.load_ledger(today()).await,
        }
    }
}

impl<P, G, L, H> AnalysisService for Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    #[instrument(skip(self, input), fields(barcode = %input.product.barcode))]
    async fn analyze_product(&self, input: AnalyzeProductInput) -> Result<AnalysisVerdict, CoreError> {
        validate_serving_size(input.serving_size)?;
        let context = self.load_context().await;

        let verdict = analyze(
            &input.product,
            input.serving_size,
            &context,
            &self.reference_data,
        )?;

        debug!(
            health_score = verdict.health.score,
            safety_score = verdict.allergens.safety_score,
            diet_score = verdict.dietary.score,
            goal_warnings = verdict.goals.warnings.len(),
            "product analyzed"
        );

        Ok(verdict)
    }

    #[instrument(skip(self, input), fields(barcode = %input.barcode))]
    async fn analyze_open_food_facts(
        &self,
        input: AnalyzeOpenFoodFactsInput,
    ) -> Result<AnalysisVerdict, CoreError> {
        let product = input
            .payload
            .into_record(&input.barcode, &self.reference_data.ingredient_quality);

        self.analyze_product(AnalyzeProductInput {
            product,
            serving_size: input.serving_size,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{
        application::tests::{service_in, TestStore},
        domain::{
            allergen::WarningLevel,
            goal::{
                entities::{DailyIntakeLedger, GoalSet},
                ports::GoalTrackerService,
                value_objects::IntakeInput,
            },
            product::{
                open_food_facts::OpenFoodFactsProduct,
                value_objects::{Nutrient, NutritionValue},
            },
            profile::{entities::UserProfile, ports::ProfileService},
        },
    };

    fn crackers() -> ProductRecord {
        ProductRecord {
            barcode: "5000168001234".to_string(),
            name: "Cheese Crackers".to_string(),
            brand: "Snackco".to_string(),
            ingredients_text: Some("Wheat flour, sugar, milk powder, salt".to_string()),
            nutrition: Some(BTreeMap::from([
                ("sugars".to_string(), NutritionValue::Number(20.0)),
                ("sodium".to_string(), NutritionValue::Number(0.9)),
                ("fat".to_string(), NutritionValue::Number(10.0)),
            ])),
            ..Default::default()
        }
    }

    fn vegan_milk_allergic() -> AnalysisContext {
        let reference = ReferenceData::builtin();
        let mut profile = UserProfile::default();
        profile.set_diet("vegan", &reference.diets).unwrap();
        profile.add_allergen("milk", &reference.allergens).unwrap();

        AnalysisContext {
            profile,
            goals: GoalSet::default(),
            ledger: DailyIntakeLedger::new(today()),
        }
    }

    #[test]
    fn merges_all_four_analyzers() {
        let verdict = analyze(
            &crackers(),
            100.0,
            &vegan_milk_allergic(),
            &ReferenceData::builtin(),
        )
        .unwrap();

        assert_eq!(verdict.barcode, "5000168001234");
        assert_eq!(verdict.product_name, "Cheese Crackers");
        assert_eq!(verdict.allergens.warning.level, WarningLevel::Danger);
        assert_eq!(verdict.allergens.safety_score, 60);
        assert!(!verdict.dietary.compatible);
        assert_eq!(verdict.dietary.score, 70);
        assert_eq!(verdict.health.score, 25);
        assert_eq!(verdict.goals.impact.sugar, 20.0);
        assert!(verdict.goals.warnings.is_empty());
    }

    #[test]
    fn empty_record_degrades_to_no_match() {
        let context = AnalysisContext {
            profile: UserProfile::default(),
            goals: GoalSet::default(),
            ledger: DailyIntakeLedger::new(today()),
        };

        let verdict = analyze(
            &ProductRecord::default(),
            100.0,
            &context,
            &ReferenceData::builtin(),
        )
        .unwrap();

        assert!(!verdict.allergens.has_allergens);
        assert!(verdict.dietary.compatible);
        assert_eq!(verdict.health.score, 50);
        assert_eq!(verdict.goals.impact.calories, 0.0);
    }

    #[test]
    fn rejects_invalid_serving_size() {
        let result = analyze(
            &crackers(),
            -1.0,
            &vegan_milk_allergic(),
            &ReferenceData::builtin(),
        );
        assert_eq!(result, Err(CoreError::InvalidServingSize));
    }

    #[tokio::test]
    async fn service_uses_stored_profile_and_never_writes() {
        let store = TestStore::new();
        let service = service_in(&store);
        service.set_diet("vegan".to_string()).await.unwrap();
        service.add_allergen("milk".to_string()).await.unwrap();

        let verdict = service
            .analyze_product(AnalyzeProductInput {
                product: crackers(),
                serving_size: 100.0,
            })
            .await
            .unwrap();

        assert_eq!(verdict.allergens.user_allergens.len(), 1);
        assert_eq!(verdict.dietary.diet, "vegan");
        assert_eq!(service.today_intake().await.unwrap().scanned_count(), 0);
    }

    #[tokio::test]
    async fn projection_sees_committed_intake() {
        let store = TestStore::new();
        let service = service_in(&store);
        for _ in 0..3 {
            service
                .commit_intake(IntakeInput {
                    product: crackers(),
                    serving_size: 100.0,
                })
                .await
                .unwrap();
        }

        let verdict = service
            .analyze_product(AnalyzeProductInput {
                product: crackers(),
                serving_size: 100.0,
            })
            .await
            .unwrap();

        assert_eq!(verdict.goals.remaining[&Nutrient::Sugar].current, 80.0);
        assert_eq!(verdict.goals.warnings.len(), 1);
        assert_eq!(
            verdict.goals.warnings[0].message,
            "This will exceed your daily sugar limit"
        );
    }

    #[tokio::test]
    async fn maps_open_food_facts_payload() {
        let store = TestStore::new();
        let service = service_in(&store);
        let payload: OpenFoodFactsProduct = serde_json::from_value(serde_json::json!({
            "product_name": "Hazelnut Spread",
            "brands": "Nutco",
            "ingredients_text": "Sugar, palm oil, hazelnuts 13%, skimmed milk powder 8.7%",
            "nutriments": { "sugars": 56.3, "fat": 30.9, "sodium": 0.0428 },
            "nutriscore_grade": "e",
            "allergens": "en:milk,en:nuts"
        }))
        .unwrap();

        let verdict = service
            .analyze_open_food_facts(AnalyzeOpenFoodFactsInput {
                barcode: "3017620422003".to_string(),
                payload,
                serving_size: 15.0,
            })
            .await
            .unwrap();

        assert_eq!(verdict.product_name, "Hazelnut Spread");
        assert_eq!(verdict.serving_size, 15.0);
        let names: Vec<_> = verdict
            .allergens
            .all_allergens
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["milk", "tree nuts"]);
        assert!(verdict
            .health
            .factors
            .iter()
            .any(|f| f.name == "Ingredient Quality"));
    }
}
