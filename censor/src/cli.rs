// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::io::{self, BufRead as _};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::job::{JobController, JobEvent};
use crate::report::export_results;
use crate::utils::{print_summary, print_top_words};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose files are redacted (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// File with one forbidden word per line
    #[arg(short, long)]
    pub words: PathBuf,

    /// Configuration file (defaults to the nearest censor.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob selecting the files to redact (e.g. "*.txt")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Number of words in the ranking
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Delay between files in milliseconds
    #[arg(long)]
    pub throttle_ms: Option<u64>,

    /// Also save the per-file results to this file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Read commands from stdin while running: p = pause, r = resume, c = cancel
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn setup_logging(&self) {
        let level = if self.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    /// Loads the configuration and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Fails if a configuration file was found or given but cannot be loaded.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::resolve(self.config.as_deref(), &self.directory)?;
        if let Some(pattern) = &self.pattern {
            config.file_pattern.clone_from(pattern);
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(throttle_ms) = self.throttle_ms {
            config.throttle_ms = throttle_ms;
        }
        Ok(config)
    }
}

/// A command typed by the user while a run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Cancel,
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "pause" => Some(Self::Pause),
            "r" | "resume" => Some(Self::Resume),
            "c" | "cancel" | "stop" => Some(Self::Cancel),
            _ => None,
        }
    }
}

fn spawn_stdin_commands() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match Command::parse(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                None => eprintln!("Unknown command '{}', use p, r or c", line.trim()),
            }
        }
    });
    rx
}

/// Runs one redaction pass and prints its progress and results.
///
/// `interrupted` is polled while waiting for events; once it is set the run
/// is cancelled.
///
/// # Errors
///
/// Fails if the configuration is invalid, the run fails, or the export
/// cannot be written.
pub fn run(args: Args, interrupted: &AtomicBool) -> Result<()> {
    let config = args.resolve_config()?;
    let top = config.top_n;
    let mut controller = JobController::new(config);
    let handle = controller
        .start(&args.directory, &args.words)
        .with_context(|| format!("Failed to start run in {}", args.directory.display()))?;

    let commands = args.interactive.then(spawn_stdin_commands);
    if commands.is_some() {
        println!("Commands: p = pause, r = resume, c = cancel");
    }

    let mut cancel_sent = false;
    let terminal = loop {
        if !cancel_sent && interrupted.load(Ordering::SeqCst) {
            controller.cancel();
            cancel_sent = true;
        }
        if let Some(commands) = &commands {
            while let Ok(command) = commands.try_recv() {
                match command {
                    Command::Pause => {
                        controller.pause();
                        println!("Paused");
                    }
                    Command::Resume => {
                        controller.resume();
                        println!("Resumed");
                    }
                    Command::Cancel => controller.cancel(),
                }
            }
        }

        match handle.recv_timeout(POLL_INTERVAL) {
            Ok(JobEvent::Progress { current, total }) => println!("[{current}/{total}]"),
            Ok(JobEvent::FileError { file_name, message }) => {
                eprintln!("Error processing {file_name}: {message}");
            }
            Ok(event) => break Some(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break None,
        }
    };
    controller.join();

    let results = match terminal {
        Some(JobEvent::Completed(summary)) => {
            print_summary(&summary);
            print_top_words(&summary.tally, top);
            summary.results
        }
        Some(JobEvent::Cancelled { results }) => {
            println!("Run cancelled after {} file(s); no report written", results.len());
            results
        }
        Some(JobEvent::Failed { message }) => bail!("Run failed: {message}"),
        Some(_) | None => bail!("Run ended without a final status"),
    };

    if let Some(path) = &args.export {
        export_results(path, &results)
            .with_context(|| format!("Failed to export results to {}", path.display()))?;
        println!("Results exported to {}", path.display());
    }

    Ok(())
}
