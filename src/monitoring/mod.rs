pub mod cycle_logger;
pub mod log_export;

pub use cycle_logger::{log_state, visualize_state, write_cycle_report};
pub use log_export::{summarize, write_log_csv, write_log_json, RunSummary};
