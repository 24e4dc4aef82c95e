pub mod goal_repository;
pub mod intake_repository;
