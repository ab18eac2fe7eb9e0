// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod job;
pub mod models;
pub mod report;
pub mod utils;


pub use cli::{Args, run};
pub use config::Config;
pub use crate::core::redactor::{Redaction, Redactor};
pub use crate::core::scanner::FileScanner;
pub use crate::core::word_list::WordList;
pub use error::JobError;
pub use job::{JobController, JobEvent, JobState, RunControl, RunHandle, RunOutcome, RunRequest};
pub use models::{FileResult, GlobalTally, RunSummary, WordCount};
pub use report::{ReportWriter, export_results};
