// src/utils.rs
use crate::models::{FileResult, GlobalTally, RunSummary};

pub fn print_summary(summary: &RunSummary) {
    println!("Files scanned: {}", summary.files_total);
    println!("Files processed: {}", summary.files_processed());
    println!("Files with forbidden words: {}", summary.files_with_matches());
    let replaced: u64 = summary.results.iter().map(FileResult::total_matches).sum();
    println!("Words replaced: {replaced}");
    if summary.files_failed > 0 {
        println!("Files failed: {}", summary.files_failed);
    }
    println!("Redacted copies written: {}", summary.copies_written);
    println!("Report: {}", summary.report_path.display());
}

pub fn print_top_words(tally: &GlobalTally, top: usize) {
    for entry in tally.ranked(top).iter().filter(|entry| entry.count > 0) {
        println!("{:8} hits  {}", entry.count, entry.word);
    }
}
