pub mod services;
pub mod value_objects;

pub use services::check_diet;
pub use value_objects::*;
