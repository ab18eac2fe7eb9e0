// tests/integration_tests/control_test.rs
use super::common::{fast_config, setup_workspace};
use anyhow::{Result, bail};
use censor::{Config, JobController, JobError, JobEvent, JobState};
use std::time::Duration;

fn paced_config() -> Config {
    Config {
        throttle_ms: 250,
        ..Config::default()
    }
}

fn five_files() -> [(&'static str, &'static str); 5] {
    [
        ("a.txt", "drop tables"),
        ("b.txt", "drop it"),
        ("c.txt", "nothing"),
        ("d.txt", "drop"),
        ("e.txt", "drop drop"),
    ]
}

#[test]
fn test_cancel_before_file_k() -> Result<()> {
    let workspace = setup_workspace("drop", &five_files())?;
    let mut controller = JobController::new(paced_config());
    let handle = controller.start(workspace.target.path(), &workspace.words)?;

    // cancel while the loop is pacing after the second file
    loop {
        match handle.recv_timeout(Duration::from_secs(5)) {
            Ok(JobEvent::Progress { current: 2, .. }) => break,
            Ok(JobEvent::Progress { .. }) => {}
            other => bail!("unexpected event {other:?}"),
        }
    }
    controller.cancel();

    match handle.wait() {
        Some(JobEvent::Cancelled { results }) => assert!(results.len() < 3),
        other => bail!("expected cancellation, got {other:?}"),
    }
    controller.join();

    assert_eq!(controller.state(), JobState::Cancelled);
    assert!(!workspace.target.path().join("Report.csv").exists());
    Ok(())
}

#[test]
fn test_pause_resume_processes_each_file_once() -> Result<()> {
    let workspace = setup_workspace("drop", &five_files())?;
    let mut controller = JobController::new(paced_config());
    let handle = controller.start(workspace.target.path(), &workspace.words)?;

    let mut progress = Vec::new();
    match handle.recv_timeout(Duration::from_secs(5)) {
        Ok(JobEvent::Progress { current, .. }) => progress.push(current),
        other => bail!("unexpected event {other:?}"),
    }
    controller.pause();
    assert!(
        handle.recv_timeout(Duration::from_millis(500)).is_err(),
        "Nothing may happen while paused"
    );
    controller.resume();

    let mut terminal = None;
    for event in handle {
        match event {
            JobEvent::Progress { current, .. } => progress.push(current),
            other => terminal = Some(other),
        }
    }
    controller.join();

    assert_eq!(progress, vec![1, 2, 3, 4, 5]);
    match terminal {
        Some(JobEvent::Completed(summary)) => {
            assert_eq!(summary.results.len(), 5);
            assert_eq!(summary.tally.get("drop"), 5);
        }
        other => bail!("expected completion, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_commands_without_active_run_are_ignored() {
    let controller = JobController::new(fast_config());
    controller.pause();
    controller.resume();
    controller.cancel();
    assert_eq!(controller.state(), JobState::Idle);
}

#[test]
fn test_controller_can_run_again_after_completion() -> Result<()> {
    let workspace = setup_workspace("drop", &[("a.txt", "drop")])?;
    let mut controller = JobController::new(fast_config());

    for _ in 0..2 {
        let handle = controller.start(workspace.target.path(), &workspace.words)?;
        assert!(matches!(handle.wait(), Some(JobEvent::Completed(_))));
        controller.join();
    }
    assert_eq!(controller.state(), JobState::Completed);
    Ok(())
}

#[test]
fn test_missing_directory_fails_the_run() -> Result<()> {
    let workspace = setup_workspace("drop", &[])?;
    let mut controller = JobController::new(fast_config());
    let handle = controller.start(workspace.target.path().join("missing"), &workspace.words)?;

    match handle.wait() {
        Some(JobEvent::Failed { message }) => assert!(message.contains("missing")),
        other => bail!("expected failure, got {other:?}"),
    }
    controller.join();
    assert_eq!(controller.state(), JobState::Failed);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_at_start() -> Result<()> {
    let workspace = setup_workspace("drop", &[])?;
    let mut controller = JobController::new(Config {
        copy_prefix: String::new(),
        ..fast_config()
    });
    assert!(matches!(
        controller.start(workspace.target.path(), &workspace.words),
        Err(JobError::Config(_))
    ));
    Ok(())
}

#[test]
fn test_unwritable_report_fails_after_copies() -> Result<()> {
    let workspace = setup_workspace("drop", &[("a.txt", "drop it")])?;
    std::fs::create_dir(workspace.target.path().join("Report.csv"))?;
    let mut controller = JobController::new(fast_config());

    let events: Vec<JobEvent> = controller
        .start(workspace.target.path(), &workspace.words)?
        .into_iter()
        .collect();
    controller.join();

    let terminal: Vec<&JobEvent> = events.iter().filter(|e| e.is_terminal()).collect();
    assert!(matches!(terminal.as_slice(), [JobEvent::Failed { .. }]));
    assert_eq!(controller.state(), JobState::Failed);
    assert!(workspace.target.path().join("Copy_a.txt").exists());
    Ok(())
}
