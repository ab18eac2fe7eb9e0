// src/job/controller.rs
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::Config;
use crate::error::JobError;
use crate::job::control::{JobState, RunControl};
use crate::job::engine::{RunOutcome, RunRequest, execute};
use crate::job::events::JobEvent;

/// Starts redaction runs on a background thread and relays caller commands to them.
///
/// Only one run may be active per controller. None of the methods block on
/// the run thread, with the exception of [`JobController::join`].
#[derive(Debug)]
pub struct JobController {
    config: Config,
    control: Arc<RunControl>,
    worker: Option<JoinHandle<()>>,
}

impl JobController {
    #[inline]
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            control: Arc::new(RunControl::new()),
            worker: None,
        }
    }

    /// Spawns a run over `directory` using the words in `word_list`.
    ///
    /// Word-list and directory errors are not returned here; they arrive as
    /// a [`JobEvent::Failed`] on the returned handle.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Config`] for empty paths or invalid settings and
    /// [`JobError::AlreadyRunning`] while a previous run is still active.
    pub fn start(
        &mut self,
        directory: impl Into<PathBuf>,
        word_list: impl Into<PathBuf>,
    ) -> Result<RunHandle, JobError> {
        let request = RunRequest::new(directory, word_list);
        request.validate()?;
        self.config.validate()?;

        if self.control.state().is_active() {
            return Err(JobError::AlreadyRunning);
        }
        if let Some(previous) = self.worker.take() {
            // terminal state was already published, the thread is only unwinding
            let _ = previous.join();
        }

        let control = Arc::new(RunControl::new());
        control.begin();
        self.control = Arc::clone(&control);

        let (tx, rx) = mpsc::channel();
        let config = self.config.clone();
        self.worker = Some(thread::spawn(move || {
            drive(&request, &config, &control, &tx);
        }));

        Ok(RunHandle { events: rx })
    }

    pub fn pause(&self) {
        if self.control.state().is_active() {
            self.control.pause();
            tracing::info!("Pause requested");
        }
    }

    pub fn resume(&self) {
        if self.control.state().is_active() {
            self.control.resume();
            tracing::info!("Resume requested");
        }
    }

    pub fn cancel(&self) {
        if self.control.state().is_active() {
            self.control.cancel();
            tracing::info!("Cancel requested");
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> JobState {
        self.control.state()
    }

    /// Waits for the current run thread to exit.
    pub fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Run thread panicked outside the engine");
            }
        }
    }
}

impl Default for JobController {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Receiving end of a run's events.
///
/// The channel closes once the terminal event has been sent.
#[derive(Debug)]
pub struct RunHandle {
    events: Receiver<JobEvent>,
}

impl RunHandle {
    /// # Errors
    ///
    /// Fails once the run has ended and every event was received.
    #[inline]
    pub fn recv(&self) -> Result<JobEvent, RecvError> {
        self.events.recv()
    }

    /// # Errors
    ///
    /// Fails when no event is pending or the run has ended.
    #[inline]
    pub fn try_recv(&self) -> Result<JobEvent, TryRecvError> {
        self.events.try_recv()
    }

    /// # Errors
    ///
    /// Fails on timeout or once the run has ended.
    #[inline]
    pub fn recv_timeout(&self, timeout: Duration) -> Result<JobEvent, RecvTimeoutError> {
        self.events.recv_timeout(timeout)
    }

    /// Blocks until the run ends and returns its terminal event, dropping the rest.
    #[must_use]
    pub fn wait(self) -> Option<JobEvent> {
        self.events.iter().find(JobEvent::is_terminal)
    }
}

impl IntoIterator for RunHandle {
    type Item = JobEvent;
    type IntoIter = mpsc::IntoIter<JobEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Body of the run thread: executes the run, publishes the final state and
/// sends exactly one terminal event.
fn drive(request: &RunRequest, config: &Config, control: &RunControl, events: &Sender<JobEvent>) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        execute(request, config, control, events)
    }));

    let (state, event) = match outcome {
        Ok(Ok(RunOutcome::Completed(summary))) => {
            (JobState::Completed, JobEvent::Completed(Box::new(summary)))
        }
        Ok(Ok(RunOutcome::Cancelled { results })) => {
            (JobState::Cancelled, JobEvent::Cancelled { results })
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "Run failed");
            (
                JobState::Failed,
                JobEvent::Failed {
                    message: err.to_string(),
                },
            )
        }
        Err(_) => {
            tracing::error!("Run thread panicked");
            (
                JobState::Failed,
                JobEvent::Failed {
                    message: String::from("internal error: run thread panicked"),
                },
            )
        }
    };

    control.finish(state);
    let _ = events.send(event);
}
