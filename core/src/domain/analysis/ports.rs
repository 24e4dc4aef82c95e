use std::future::Future;

use crate::domain::{
    analysis::{
        entities::AnalysisVerdict,
        value_objects::{AnalyzeOpenFoodFactsInput, AnalyzeProductInput},
    },
    common::entities::app_errors::CoreError,
};

/// Read-only: analyses load the stored profile, goals and today's ledger
/// but never write.
pub trait AnalysisService: Send + Sync {
    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<AnalysisVerdict, CoreError>> + Send;

    fn analyze_open_food_facts(
        &self,
        input: AnalyzeOpenFoodFactsInput,
    ) -> impl Future<Output = Result<AnalysisVerdict, CoreError>> + Send;
}
