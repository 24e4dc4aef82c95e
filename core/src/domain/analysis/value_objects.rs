use crate::domain::product::{entities::ProductRecord, open_food_facts::OpenFoodFactsProduct};

#[derive(Debug, Clone)]
pub struct AnalyzeProductInput {
    pub product: ProductRecord,
    pub serving_size: f64,
}

#[derive(Debug, Clone)]
pub struct AnalyzeOpenFoodFactsInput {
    pub barcode: String,
    pub payload: OpenFoodFactsProduct,
    pub serving_size: f64,
}
