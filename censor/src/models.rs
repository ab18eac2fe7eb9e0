// src/models.rs
mod file_result;
mod global_tally;
mod run_summary;

pub use file_result::{FileResult, WordCount};
pub use global_tally::GlobalTally;
pub use run_summary::RunSummary;
