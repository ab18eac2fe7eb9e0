// src/job/control.rs
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Lifecycle of a run as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
    Failed,
}

impl JobState {
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Failed)
    }
}

/// What the run loop should do after a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Proceed,
    Cancel,
}

#[derive(Debug)]
struct Flags {
    cancel_requested: bool,
    paused: bool,
    state: JobState,
}

/// Pause and cancel requests shared between the caller and the run thread.
///
/// All fields sit behind one mutex; every change that can release a waiting
/// run thread is broadcast on the condvar.
#[derive(Debug)]
pub struct RunControl {
    flags: Mutex<Flags>,
    changed: Condvar,
}

impl RunControl {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: Mutex::new(Flags {
                cancel_requested: false,
                paused: false,
                state: JobState::Idle,
            }),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Flags> {
        // flags stay consistent even if a holder panicked
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> JobState {
        self.lock().state
    }

    pub fn pause(&self) {
        let mut flags = self.lock();
        flags.paused = true;
        if flags.state == JobState::Running {
            flags.state = JobState::Paused;
        }
    }

    pub fn resume(&self) {
        let mut flags = self.lock();
        flags.paused = false;
        if flags.state == JobState::Paused {
            flags.state = JobState::Running;
        }
        self.changed.notify_all();
    }

    pub fn cancel(&self) {
        let mut flags = self.lock();
        flags.cancel_requested = true;
        self.changed.notify_all();
    }

    /// Marks the run as started, honouring a pause requested beforehand.
    pub(crate) fn begin(&self) {
        let mut flags = self.lock();
        flags.state = if flags.paused {
            JobState::Paused
        } else {
            JobState::Running
        };
    }

    pub(crate) fn finish(&self, state: JobState) {
        let mut flags = self.lock();
        flags.state = state;
        flags.paused = false;
        self.changed.notify_all();
    }

    /// Consulted by the run loop before each file.
    ///
    /// Cancellation wins over pause. While paused this blocks until either
    /// `resume` or `cancel` is called; there is no timeout.
    pub fn checkpoint(&self) -> Checkpoint {
        let flags = self.lock();
        if flags.cancel_requested {
            return Checkpoint::Cancel;
        }

        let flags = self
            .changed
            .wait_while(flags, |f| f.paused && !f.cancel_requested)
            .unwrap_or_else(PoisonError::into_inner);

        if flags.cancel_requested {
            Checkpoint::Cancel
        } else {
            Checkpoint::Proceed
        }
    }

    /// Sleeps for `delay` between files, waking early on cancellation.
    pub fn pace(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        let flags = self.lock();
        let (_flags, _timed_out) = self
            .changed
            .wait_timeout_while(flags, delay, |f| !f.cancel_requested)
            .unwrap_or_else(PoisonError::into_inner);
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}
