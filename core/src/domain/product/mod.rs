pub mod entities;
pub mod open_food_facts;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
