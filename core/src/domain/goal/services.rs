use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::{load_for_update, load_or_else, persist, Loaded, Service},
        today,
    },
    goal::{
        entities::{DailyIntakeLedger, GoalSet, IntakeEntry, NutrientGoal},
        helpers::{
            daily_progress, project_impact, scale_nutrients, validate_serving_size, week_ending,
            weekly_stats,
        },
        ports::{GoalRepository, GoalTrackerService, IntakeLedgerRepository},
        value_objects::{DailyProgress, DayStats, GoalImpact, IntakeInput},
    },
    history::ports::HistoryRepository,
    product::value_objects::Nutrient,
    profile::ports::ProfileRepository,
};

impl<P, G, L, H> Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    pub(crate) async fn load_goals(&self) -> GoalSet {
        load_or_else(
            "goals",
            self.goal_repository.get_goals(),
            || self.reference_data.default_goals.clone(),
        )
        .await
    }

    pub(crate) async fn load_ledger(&self, date: NaiveDate) -> DailyIntakeLedger {
        load_or_else(
            "intake ledger",
            self.intake_repository.get_ledger(date),
            || DailyIntakeLedger::new(date),
        )
        .await
    }

    async fn load_goals_for_update(&self) -> Loaded<GoalSet> {
        load_for_update(
            "goals",
            self.goal_repository.get_goals(),
            || self.reference_data.default_goals.clone(),
        )
        .await
    }

    async fn load_ledger_for_update(&self, date: NaiveDate) -> Loaded<DailyIntakeLedger> {
        load_for_update(
            "intake ledger",
            self.intake_repository.get_ledger(date),
            || DailyIntakeLedger::new(date),
        )
        .await
    }
}

impl<P, G, L, H> GoalTrackerService for Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    #[instrument(skip(self, input), fields(barcode = %input.product.barcode))]
    async fn project_intake(&self, input: IntakeInput) -> Result<GoalImpact, CoreError> {
        let serving_size = validate_serving_size(input.serving_size)?;
        let goals = self.load_goals().await;
        let ledger = self.load_ledger(today()).await;

        Ok(project_impact(&input.product, serving_size, &goals, &ledger))
    }

    #[instrument(skip(self, input), fields(barcode = %input.product.barcode))]
    async fn commit_intake(&self, input: IntakeInput) -> Result<IntakeEntry, CoreError> {
        let serving_size = validate_serving_size(input.serving_size)?;
        let mut ledger = self.load_ledger_for_update(today()).await;

        let impact = scale_nutrients(&input.product, serving_size);
        let entry = ledger
            .value
            .record(&input.product, serving_size, &impact)
            .clone();

        info!(
            date = %ledger.value.date,
            serving_size,
            calories = impact.calories,
            "intake committed"
        );

        ledger
            .save(
                "intake ledger",
                self.intake_repository.save_ledger(ledger.value.clone()),
            )
            .await;

        Ok(entry)
    }

    #[instrument(skip(self))]
    async fn get_goals(&self) -> Result<GoalSet, CoreError> {
        Ok(self.load_goals().await)
    }

    #[instrument(skip(self))]
    async fn set_goal(&self, nutrient: Nutrient, goal: NutrientGoal) -> Result<GoalSet, CoreError> {
        let mut goals = self.load_goals_for_update().await;
        goals.value.set(nutrient, goal)?;

        info!(nutrient = %nutrient, target = goal.target, "goal updated");
        goals
            .save("goals", self.goal_repository.save_goals(goals.value.clone()))
            .await;

        Ok(goals.value)
    }

    #[instrument(skip(self))]
    async fn reset_goals(&self) -> Result<GoalSet, CoreError> {
        let goals = self.reference_data.default_goals.clone();

        info!("goals reset to defaults");
        persist("goals", self.goal_repository.save_goals(goals.clone())).await;

        Ok(goals)
    }

    #[instrument(skip(self))]
    async fn today_intake(&self) -> Result<DailyIntakeLedger, CoreError> {
        Ok(self.load_ledger(today()).await)
    }

    #[instrument(skip(self))]
    async fn daily_progress(&self) -> Result<DailyProgress, CoreError> {
        let goals = self.load_goals().await;
        let ledger = self.load_ledger(today()).await;

        Ok(daily_progress(&goals, &ledger))
    }

    #[instrument(skip(self))]
    async fn weekly_stats(&self) -> Result<Vec<DayStats>, CoreError> {
        let today = today();
        let ledgers = join_all(week_ending(today).into_iter().map(|date| async move {
            match self.intake_repository.get_ledger(date).await {
                Ok(ledger) => ledger,
                Err(e) => {
                    warn!(
                        error = %e,
                        %date,
                        "failed to load intake ledger, counting the day as empty"
                    );
                    None
                }
            }
        }))
        .await;
        let ledgers: Vec<DailyIntakeLedger> = ledgers.into_iter().flatten().collect();

        Ok(weekly_stats(today, &ledgers))
    }
}
