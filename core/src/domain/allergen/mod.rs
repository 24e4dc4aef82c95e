pub mod services;
pub mod value_objects;

pub use services::detect_allergens;
pub use value_objects::*;
