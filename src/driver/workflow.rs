//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Result};
use log::info;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_record_repository::FileRecordRepository;
use crate::application::dto::report_config::{OutputStyle, ReportConfig, ReportFormat};
use crate::application::use_cases::report_batch::{BatchOutcome, ReportBatchUseCase};
use crate::application::use_cases::session_report::{RecordOutcome, SessionReport};

use super::cli::Args;

/// Session Report Workflow
pub struct ReportWorkflow {
    config: Config,
}

impl ReportWorkflow {
    /// Create a new workflow instance with injected configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the report configuration from config file values and CLI flags
    pub fn report_config(&self, args: &Args) -> Result<ReportConfig> {
        let profile = self.config.resolve_profile(args.weight, args.height)?;
        let format = if args.day {
            ReportFormat::DaySteps
        } else {
            ReportFormat::Training
        };
        let output = if args.json {
            OutputStyle::Json
        } else {
            OutputStyle::Text
        };
        Ok(ReportConfig::new(profile, format, output))
    }

    /// Execute the workflow, writing reports to `out` and failures to `err`
    pub fn execute<O: Write, E: Write>(
        &self,
        args: &Args,
        out: &mut O,
        err: &mut E,
    ) -> Result<BatchOutcome> {
        let report_config = self.report_config(args)?;
        info!(
            "Reporting with weight {} kg, height {} m ({:?})",
            report_config.profile.weight_kg, report_config.profile.height_m, report_config.format
        );

        let use_case = ReportBatchUseCase::new(
            Arc::new(FileRecordRepository::new()),
            SessionReport::new(report_config),
        );

        let mut batch = use_case.execute_records(&args.records);
        if let Some(file) = &args.file {
            let from_file = use_case.execute_source(Path::new(file))?;
            batch.outcomes.extend(from_file.outcomes);
        }

        if batch.is_empty() {
            bail!("No records given: pass records as arguments or use --file");
        }

        for (raw, outcome) in &batch.outcomes {
            match outcome {
                RecordOutcome::Report(report) => {
                    if args.json {
                        writeln!(out, "{}", report)?;
                    } else {
                        write!(out, "{}", report)?;
                        writeln!(out)?;
                    }
                }
                RecordOutcome::Failed(e) => writeln!(err, "✗ {}: {}", raw, e)?,
                RecordOutcome::Empty => writeln!(err, "✗ {}: no report", raw)?,
            }
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn workflow() -> ReportWorkflow {
        ReportWorkflow::new(Config {
            weight_kg: Some(75.0),
            height_m: Some(1.75),
        })
    }

    #[test]
    fn test_report_config_from_args() {
        let args = Args::parse_from(["steptrack", "--day", "--json", "--height", "1.8"]);
        let config = workflow().report_config(&args).unwrap();

        assert_eq!(config.format, ReportFormat::DaySteps);
        assert_eq!(config.output, OutputStyle::Json);
        assert_eq!(config.profile.weight_kg, 75.0);
        assert_eq!(config.profile.height_m, 1.8);
    }

    #[test]
    fn test_execute_writes_reports_and_failures() {
        let args = Args::parse_from(["steptrack", "3000,Running,30m", "abc,Walking,10m"]);
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();

        let batch = workflow().execute(&args, &mut out, &mut err).unwrap();

        assert_eq!(batch.succeeded(), 1);
        assert_eq!(batch.failed(), 1);
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(out.starts_with("Training type: Running\nDuration: 0.50 h.\n"));
        assert!(err.contains("abc,Walking,10m"));
        assert!(err.contains("invalid step count"));
    }

    #[test]
    fn test_execute_day_failure_has_no_reason() {
        let args = Args::parse_from(["steptrack", "--day", "4000,-5m"]);
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();

        let batch = workflow().execute(&args, &mut out, &mut err).unwrap();

        assert_eq!(batch.failed(), 1);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "✗ 4000,-5m: no report\n");
    }

    #[test]
    fn test_execute_without_records_fails() {
        let args = Args::parse_from(["steptrack"]);
        let result = workflow().execute(&args, &mut std::io::sink(), &mut std::io::sink());
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_without_profile_fails() {
        let args = Args::parse_from(["steptrack", "3000,Running,30m"]);
        let result = ReportWorkflow::new(Config::default()).execute(
            &args,
            &mut std::io::sink(),
            &mut std::io::sink(),
        );
        assert!(result.unwrap_err().to_string().contains("Weight"));
    }
}
