pub mod clear_history;
pub mod export_history;
pub mod get_history;
pub mod get_stats;
pub mod import_history;
pub mod record_scan;
pub mod remove_scan;
pub mod search_history;
