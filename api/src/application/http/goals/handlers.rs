pub mod get_goals;
pub mod reset_goals;
pub mod set_goal;
