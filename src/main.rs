//! Steptrack - training record calculator
//!
//! 歩数の記録から距離・速度・消費カロリーを表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use steptrack::adapter::config::Config;
use steptrack::driver::{Args, ReportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (the file is optional when flags carry the profile)
    let config = Config::load_or_default(&args.config)?;

    let workflow = ReportWorkflow::new(config);
    let batch = workflow.execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    if batch.failed() > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
