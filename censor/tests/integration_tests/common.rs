// tests/integration_tests/common.rs
use anyhow::{Result, bail};
use censor::{Config, JobController, JobEvent, RunSummary};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content)?;
    Ok(path)
}

pub fn fast_config() -> Config {
    Config {
        throttle_ms: 0,
        ..Config::default()
    }
}

/// Target directory plus a word list kept outside of it.
pub struct Workspace {
    pub target: TempDir,
    pub lists: TempDir,
    pub words: PathBuf,
}

pub fn setup_workspace(words: &str, files: &[(&str, &str)]) -> Result<Workspace> {
    let target = TempDir::new()?;
    for (name, content) in files {
        create_test_file(target.path(), name, content.as_bytes())?;
    }
    let lists = TempDir::new()?;
    let words = create_test_file(lists.path(), "forbidden.txt", words.as_bytes())?;
    Ok(Workspace {
        target,
        lists,
        words,
    })
}

/// Runs to the end and returns every event in order.
pub fn run_to_end(config: Config, workspace: &Workspace) -> Result<Vec<JobEvent>> {
    let mut controller = JobController::new(config);
    let events: Vec<JobEvent> = controller
        .start(workspace.target.path(), &workspace.words)?
        .into_iter()
        .collect();
    controller.join();
    Ok(events)
}

pub fn expect_completed(events: &[JobEvent]) -> Result<&RunSummary> {
    match events.last() {
        Some(JobEvent::Completed(summary)) => Ok(summary),
        other => bail!("expected a completed run, got {other:?}"),
    }
}

pub fn read_report(workspace: &Workspace) -> Result<String> {
    Ok(fs::read_to_string(workspace.target.path().join("Report.csv"))?)
}
