pub mod analyze_open_food_facts;
pub mod analyze_product;
