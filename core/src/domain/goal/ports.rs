use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    goal::{
        entities::{DailyIntakeLedger, GoalSet, IntakeEntry, NutrientGoal},
        value_objects::{DailyProgress, DayStats, GoalImpact, IntakeInput},
    },
    product::value_objects::Nutrient,
};

#[cfg_attr(test, mockall::automock)]
pub trait GoalRepository: Send + Sync {
    fn get_goals(&self) -> impl Future<Output = Result<Option<GoalSet>, CoreError>> + Send;

    fn save_goals(&self, goals: GoalSet) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Ledgers are keyed by calendar day.
#[cfg_attr(test, mockall::automock)]
pub trait IntakeLedgerRepository: Send + Sync {
    fn get_ledger(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<DailyIntakeLedger>, CoreError>> + Send;

    fn save_ledger(
        &self,
        ledger: DailyIntakeLedger,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait GoalTrackerService: Send + Sync {
    /// Forecast against today's ledger; nothing is written.
    fn project_intake(
        &self,
        input: IntakeInput,
    ) -> impl Future<Output = Result<GoalImpact, CoreError>> + Send;

    /// Adds the serving to today's ledger and persists it.
    fn commit_intake(
        &self,
        input: IntakeInput,
    ) -> impl Future<Output = Result<IntakeEntry, CoreError>> + Send;

    fn get_goals(&self) -> impl Future<Output = Result<GoalSet, CoreError>> + Send;

    fn set_goal(
        &self,
        nutrient: Nutrient,
        goal: NutrientGoal,
    ) -> impl Future<Output = Result<GoalSet, CoreError>> + Send;

    fn reset_goals(&self) -> impl Future<Output = Result<GoalSet, CoreError>> + Send;

    fn today_intake(&self) -> impl Future<Output = Result<DailyIntakeLedger, CoreError>> + Send;

    fn daily_progress(&self) -> impl Future<Output = Result<DailyProgress, CoreError>> + Send;

    fn weekly_stats(&self) -> impl Future<Output = Result<Vec<DayStats>, CoreError>> + Send;
}
