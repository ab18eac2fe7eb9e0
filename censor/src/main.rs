// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use censor::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    args.setup_logging();

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })?;

    run(args, &interrupted)
}
