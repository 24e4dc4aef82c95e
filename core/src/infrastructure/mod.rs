pub mod goal;
pub mod history;
pub mod json_store;
pub mod profile;
