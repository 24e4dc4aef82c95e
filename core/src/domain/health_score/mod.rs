pub mod services;
pub mod value_objects;

pub use services::score_product;
pub use value_objects::*;
