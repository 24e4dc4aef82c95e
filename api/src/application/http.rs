pub mod analysis;
pub mod goals;
pub mod health;
pub mod history;
pub mod intake;
pub mod profile;
pub mod server;
