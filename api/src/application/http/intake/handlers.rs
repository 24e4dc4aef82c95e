pub mod commit_intake;
pub mod get_progress;
pub mod get_today;
pub mod get_weekly;
pub mod project_intake;
