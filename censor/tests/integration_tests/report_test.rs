// tests/integration_tests/report_test.rs
use super::common::{expect_completed, fast_config, read_report, run_to_end, setup_workspace};
use anyhow::Result;
use censor::{Config, JobEvent, export_results};
use std::fs;

#[test]
fn test_report_layout() -> Result<()> {
    let workspace = setup_workspace(
        "red\nblue",
        &[("colours.txt", "red blue red")],
    )?;
    let events = run_to_end(fast_config(), &workspace)?;
    expect_completed(&events)?;

    assert_eq!(
        read_report(&workspace)?,
        "File Name, File Size (bytes), Forbidden Word, Count\n\
         colours.txt, 12, red, 2\n\
         colours.txt, 12, blue, 1\n\
         \n\
         Top 10 Forbidden Words, Count\n\
         red, 2\n\
         blue, 1\n"
    );
    Ok(())
}

#[test]
fn test_ranking_limited_and_ties_follow_word_list() -> Result<()> {
    let words: Vec<String> = (0..12).map(|i| format!("w{i:02}")).collect();
    let content = words.join(" ");
    let workspace = setup_workspace(&words.join("\n"), &[("all.txt", content.as_str())])?;
    let events = run_to_end(fast_config(), &workspace)?;
    expect_completed(&events)?;

    let report = read_report(&workspace)?;
    let ranking: Vec<&str> = report.lines().skip_while(|l| !l.is_empty()).skip(2).collect();
    let expected: Vec<String> = words.iter().take(10).map(|w| format!("{w}, 1")).collect();
    assert_eq!(ranking, expected);
    Ok(())
}

#[test]
fn test_custom_report_name_and_top() -> Result<()> {
    let workspace = setup_workspace("a\nb\nc", &[("x.txt", "c c b a")])?;
    let config = Config {
        report_name: String::from("usage.csv"),
        top_n: 2,
        ..fast_config()
    };
    let events = run_to_end(config, &workspace)?;
    let summary = expect_completed(&events)?;

    assert_eq!(summary.report_path, workspace.target.path().join("usage.csv"));
    let report = fs::read_to_string(&summary.report_path)?;
    assert!(report.ends_with("Top 10 Forbidden Words, Count\nc, 2\na, 1\n"));
    Ok(())
}

#[test]
fn test_export_after_run() -> Result<()> {
    let workspace = setup_workspace("spam\neggs", &[("menu.txt", "eggs spam")])?;
    let events = run_to_end(fast_config(), &workspace)?;
    let results = match events.last() {
        Some(JobEvent::Completed(summary)) => summary.results.clone(),
        _ => Vec::new(),
    };

    let export = workspace.lists.path().join("export.csv");
    export_results(&export, &results)?;
    assert_eq!(
        fs::read_to_string(&export)?,
        "File Name, Forbidden Words Found\nmenu.txt, \"spam, eggs\"\n"
    );
    Ok(())
}
