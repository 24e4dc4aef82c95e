pub mod add_allergen;
pub mod add_avoided_ingredient;
pub mod get_allergens;
pub mod get_diet;
pub mod get_profile;
pub mod remove_allergen;
pub mod remove_avoided_ingredient;
pub mod set_allergens;
pub mod set_diet;
