// src/job.rs
//! Background redaction runs: a single worker thread walks the directory while
//! the caller steers it through [`JobController`] and listens on [`RunHandle`].
mod control;
mod controller;
mod engine;
mod events;

pub use control::{Checkpoint, JobState, RunControl};
pub use controller::{JobController, RunHandle};
pub use engine::{RunOutcome, RunRequest, execute};
pub use events::JobEvent;
