use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::domain::{
    catalog::Severity,
    common::entities::app_errors::CoreError,
    goal::{
        entities::{DailyIntakeLedger, GoalSet, NutrientGoal, NutrientTotals},
        value_objects::{
            DailyProgress, DayStats, GoalImpact, GoalStatus, GoalWarning, NutrientProgress,
            RemainingAllowance,
        },
    },
    product::{entities::ProductRecord, value_objects::Nutrient},
};

const HIGH_SUGAR_IMPACT: f64 = 10.0;
const HIGH_SODIUM_IMPACT: f64 = 500.0;
const WEEK_DAYS: i64 = 7;

pub fn validate_serving_size(serving_size: f64) -> Result<f64, CoreError> {
    if serving_size.is_finite() && serving_size > 0.0 {
        Ok(serving_size)
    } else {
        Err(CoreError::InvalidServingSize)
    }
}

/// Per-100 g values scaled to the serving. Missing or unparsable values
/// count as zero.
pub fn scale_nutrients(product: &ProductRecord, serving_size: f64) -> NutrientTotals {
    let factor = serving_size / 100.0;
    let mut totals = NutrientTotals::default();

    for nutrient in Nutrient::ALL {
        let per_100g = product
            .nutrient_value(nutrient)
            .and_then(|value| value.as_number())
            .unwrap_or(0.0);
        totals.set(nutrient, per_100g * factor);
    }

    totals
}

/// Forecast only: neither `ledger` nor `goals` is modified.
pub fn project_impact(
    product: &ProductRecord,
    serving_size: f64,
    goals: &GoalSet,
    ledger: &DailyIntakeLedger,
) -> GoalImpact {
    let impact = scale_nutrients(product, serving_size);
    let mut remaining = BTreeMap::new();
    let mut percent_of_goal = BTreeMap::new();
    let mut warnings = Vec::new();

    for nutrient in Nutrient::ALL {
        let Some(goal) = goals.get(nutrient) else {
            continue;
        };

        let projected = ledger.totals.get(nutrient) + impact.get(nutrient);

        remaining.insert(
            nutrient,
            RemainingAllowance {
                current: projected,
                target: goal.target,
                max: goal.max,
                remaining: goal.max.map(|max| max - projected),
            },
        );
        percent_of_goal.insert(nutrient, projected / goal.target * 100.0);

        if let Some(max) = goal.max {
            if projected > max {
                warnings.push(GoalWarning {
                    nutrient,
                    message: format!("This will exceed your daily {} limit", nutrient),
                    severity: Severity::High,
                });
            } else if projected > goal.target {
                warnings.push(GoalWarning {
                    nutrient,
                    message: format!("This will push you over your {} target", nutrient),
                    severity: Severity::Medium,
                });
            }
        }
    }

    let mut recommendations = Vec::new();
    if warnings.is_empty() {
        recommendations.push("This product fits within your daily goals".to_string());
    } else {
        recommendations.push("Consider portion size to stay within goals".to_string());
        if impact.sugar > HIGH_SUGAR_IMPACT {
            recommendations.push("High sugar content - consume in moderation".to_string());
        }
        if impact.sodium > HIGH_SODIUM_IMPACT {
            recommendations.push("High sodium - balance with low-sodium meals".to_string());
        }
    }

    GoalImpact {
        serving_size,
        impact,
        remaining,
        percent_of_goal,
        warnings,
        recommendations,
    }
}

pub fn goal_status(current: f64, goal: &NutrientGoal) -> GoalStatus {
    match goal {
        NutrientGoal { max: Some(max), .. } if current > *max => GoalStatus::Exceeded,
        NutrientGoal { target, .. } if current > *target => GoalStatus::OverTarget,
        NutrientGoal { min: Some(min), .. } if current < *min => GoalStatus::UnderTarget,
        _ => GoalStatus::OnTrack,
    }
}

pub fn daily_progress(goals: &GoalSet, ledger: &DailyIntakeLedger) -> DailyProgress {
    let nutrients = goals
        .goals
        .iter()
        .map(|(nutrient, goal)| {
            let current = ledger.totals.get(*nutrient);
            let progress = NutrientProgress {
                current: current.round(),
                target: goal.target,
                max: goal.max,
                min: goal.min,
                percentage: (current / goal.target * 100.0).round(),
                remaining: goal.max.map(|max| (max - current).round()),
                status: goal_status(current, goal),
            };
            (*nutrient, progress)
        })
        .collect();

    DailyProgress {
        date: ledger.date,
        nutrients,
    }
}

/// The seven days ending at `today`, oldest first.
pub fn week_ending(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_DAYS)
        .rev()
        .map(|days_ago| today - Duration::days(days_ago))
        .collect()
}

/// One entry per day of the week ending at `today`. Days without a ledger
/// are reported as zero, never filled from neighbouring days.
pub fn weekly_stats(today: NaiveDate, ledgers: &[DailyIntakeLedger]) -> Vec<DayStats> {
    week_ending(today)
        .into_iter()
        .map(|date| match ledgers.iter().find(|ledger| ledger.date == date) {
            Some(ledger) => DayStats {
                date,
                totals: ledger.totals,
                scanned_count: ledger.scanned_count(),
            },
            None => DayStats {
                date,
                totals: NutrientTotals::default(),
                scanned_count: 0,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::NutritionValue;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn product(barcode: &str, nutrition: &[(&str, NutritionValue)]) -> ProductRecord {
        ProductRecord {
            barcode: barcode.to_string(),
            name: format!("product {}", barcode),
            nutrition: Some(
                nutrition
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn scales_to_serving_and_parses_text() {
        let cereal = product(
            "1",
            &[
                ("energy-kcal", NutritionValue::Number(380.0)),
                ("sugars", NutritionValue::from("24 g")),
                ("fat", NutritionValue::from("N/A")),
            ],
        );

        let totals = scale_nutrients(&cereal, 50.0);

        assert_eq!(totals.calories, 190.0);
        assert_eq!(totals.sugar, 12.0);
        assert_eq!(totals.fat, 0.0);
        assert_eq!(totals.protein, 0.0);
    }

    #[test]
    fn missing_nutrition_scales_to_zero() {
        let totals = scale_nutrients(&ProductRecord::default(), 250.0);
        assert_eq!(totals, NutrientTotals::default());
    }

    #[test]
    fn rejects_non_positive_serving_sizes() {
        assert!(validate_serving_size(30.0).is_ok());
        assert_eq!(validate_serving_size(0.0), Err(CoreError::InvalidServingSize));
        assert_eq!(validate_serving_size(-5.0), Err(CoreError::InvalidServingSize));
        assert_eq!(
            validate_serving_size(f64::INFINITY),
            Err(CoreError::InvalidServingSize)
        );
    }

    #[test]
    fn projection_warns_over_target_and_over_max() {
        let mut ledger = DailyIntakeLedger::new(day(1));
        ledger.totals.sugar = 45.0;
        ledger.totals.sodium = 2200.0;
        let snack = product(
            "2",
            &[
                ("sugars", NutritionValue::Number(20.0)),
                ("sodium", NutritionValue::Number(600.0)),
            ],
        );

        let impact = project_impact(&snack, 100.0, &GoalSet::default(), &ledger);

        let sugar = &impact.remaining[&Nutrient::Sugar];
        assert_eq!(sugar.current, 65.0);
        assert_eq!(sugar.remaining, Some(10.0));
        assert_eq!(impact.percent_of_goal[&Nutrient::Sugar], 130.0);

        assert_eq!(impact.warnings.len(), 2);
        assert_eq!(impact.warnings[0].nutrient, Nutrient::Sugar);
        assert_eq!(impact.warnings[0].severity, Severity::Medium);
        assert_eq!(impact.warnings[1].nutrient, Nutrient::Sodium);
        assert_eq!(impact.warnings[1].severity, Severity::High);
        assert_eq!(
            impact.warnings[1].message,
            "This will exceed your daily sodium limit"
        );

        assert_eq!(
            impact.recommendations,
            vec![
                "Consider portion size to stay within goals",
                "High sugar content - consume in moderation",
                "High sodium - balance with low-sodium meals",
            ]
        );
    }

    #[test]
    fn goals_without_max_never_warn() {
        let mut ledger = DailyIntakeLedger::new(day(1));
        ledger.totals.protein = 90.0;
        let shake = product("3", &[("proteins", NutritionValue::Number(30.0))]);

        let impact = project_impact(&shake, 100.0, &GoalSet::default(), &ledger);

        assert!(impact.warnings.is_empty());
        assert_eq!(impact.remaining[&Nutrient::Protein].remaining, None);
        assert_eq!(
            impact.recommendations,
            vec!["This product fits within your daily goals"]
        );
    }

    #[test]
    fn projection_skips_nutrients_without_goal() {
        let mut goals = GoalSet::default();
        goals.goals.remove(&Nutrient::Fat);

        let impact = project_impact(
            &product("4", &[("fat", NutritionValue::Number(90.0))]),
            100.0,
            &goals,
            &DailyIntakeLedger::new(day(1)),
        );

        assert_eq!(impact.impact.fat, 90.0);
        assert!(!impact.remaining.contains_key(&Nutrient::Fat));
        assert!(impact.warnings.is_empty());
    }

    #[test]
    fn projection_is_repeatable_and_leaves_ledger_alone() {
        let mut ledger = DailyIntakeLedger::new(day(1));
        ledger.totals.calories = 1800.0;
        let before = ledger.clone();
        let pizza = product("5", &[("energy-kcal", NutritionValue::Number(266.0))]);

        let first = project_impact(&pizza, 150.0, &GoalSet::default(), &ledger);
        let second = project_impact(&pizza, 150.0, &GoalSet::default(), &ledger);

        assert_eq!(first, second);
        assert_eq!(ledger, before);
    }

    #[test]
    fn commit_order_does_not_change_totals() {
        let a = product(
            "a",
            &[
                ("energy-kcal", NutritionValue::Number(250.0)),
                ("sugars", NutritionValue::Number(12.5)),
            ],
        );
        let b = product(
            "b",
            &[
                ("energy-kcal", NutritionValue::Number(90.0)),
                ("fiber", NutritionValue::from("7 g")),
            ],
        );

        let mut ab = DailyIntakeLedger::new(day(1));
        ab.record(&a, 80.0, &scale_nutrients(&a, 80.0));
        ab.record(&b, 120.0, &scale_nutrients(&b, 120.0));

        let mut ba = DailyIntakeLedger::new(day(1));
        ba.record(&b, 120.0, &scale_nutrients(&b, 120.0));
        ba.record(&a, 80.0, &scale_nutrients(&a, 80.0));

        assert_eq!(ab.totals, ba.totals);
        assert_eq!(ab.scanned_count(), 2);
        assert_eq!(ba.scanned_count(), 2);
    }

    #[test]
    fn status_precedence() {
        let capped = NutrientGoal::new(50.0, Some(75.0), None);
        let floored = NutrientGoal::new(50.0, None, Some(40.0));

        assert_eq!(goal_status(80.0, &capped), GoalStatus::Exceeded);
        assert_eq!(goal_status(60.0, &capped), GoalStatus::OverTarget);
        assert_eq!(goal_status(60.0, &floored), GoalStatus::OverTarget);
        assert_eq!(goal_status(10.0, &floored), GoalStatus::UnderTarget);
        assert_eq!(goal_status(45.0, &floored), GoalStatus::OnTrack);
        assert_eq!(goal_status(0.0, &capped), GoalStatus::OnTrack);
    }

    #[test]
    fn progress_rounds_and_reports_headroom() {
        let mut ledger = DailyIntakeLedger::new(day(1));
        ledger.totals.calories = 1234.6;
        ledger.totals.fiber = 5.0;

        let progress = daily_progress(&GoalSet::default(), &ledger);
        let calories = &progress.nutrients[&Nutrient::Calories];
        let fiber = &progress.nutrients[&Nutrient::Fiber];

        assert_eq!(progress.date, day(1));
        assert_eq!(calories.current, 1235.0);
        assert_eq!(calories.percentage, 62.0);
        assert_eq!(calories.remaining, Some(1265.0));
        assert_eq!(calories.status, GoalStatus::OnTrack);
        assert_eq!(fiber.remaining, None);
        assert_eq!(fiber.status, GoalStatus::UnderTarget);
    }

    #[test]
    fn empty_week_has_seven_zeroed_days() {
        let stats = weekly_stats(day(10), &[]);

        assert_eq!(stats.len(), 7);
        assert_eq!(stats.first().unwrap().date, day(4));
        assert_eq!(stats.last().unwrap().date, day(10));
        assert!(stats
            .iter()
            .all(|s| s.totals == NutrientTotals::default() && s.scanned_count == 0));
    }

    #[test]
    fn week_uses_only_matching_days() {
        let mut tuesday = DailyIntakeLedger::new(day(5));
        tuesday.totals.sugar = 30.0;
        tuesday.record(
            &product("x", &[]),
            100.0,
            &NutrientTotals::default(),
        );
        let outside = DailyIntakeLedger::new(day(1));

        let stats = weekly_stats(day(10), &[outside, tuesday]);

        assert_eq!(stats[1].date, day(5));
        assert_eq!(stats[1].totals.sugar, 30.0);
        assert_eq!(stats[1].scanned_count, 1);
        assert_eq!(stats[0].totals.sugar, 0.0);
        assert_eq!(stats[2].totals.sugar, 0.0);
    }

    #[test]
    fn week_crosses_month_boundary() {
        let days = week_ending(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }
}
