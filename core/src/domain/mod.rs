pub mod allergen;
pub mod analysis;
pub mod catalog;
pub mod common;
pub mod dietary;
pub mod goal;
pub mod health_score;
pub mod history;
pub mod product;
pub mod profile;
