//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// トレーニング記録から距離・速度・消費カロリーを計算するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "steptrack")]
#[command(about = "Compute distance, speed and calories from step-count training records", long_about = None)]
pub struct Args {
    /// Records such as "3000,Running,30m" (or "4000,35m" with --day)
    pub records: Vec<String>,

    /// Read records from a file, one per line
    #[arg(short, long)]
    pub file: Option<String>,

    /// Body weight in kilograms (overrides config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Body height in metres (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Treat records as abbreviated "<steps>,<duration>" walking entries
    #[arg(long)]
    pub day: bool,

    /// Print summaries as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["steptrack"]);
        assert_eq!(args.config, "./.steptrack/config.json");
        assert!(args.records.is_empty());
        assert!(args.file.is_none());
        assert!(!args.day);
        assert!(!args.json);
    }

    #[test]
    fn test_args_records_and_profile() {
        let args = Args::parse_from([
            "steptrack",
            "--weight",
            "75",
            "--height",
            "1.75",
            "3000,Running,30m",
            "6000,Walking,1h",
        ]);
        assert_eq!(args.weight, Some(75.0));
        assert_eq!(args.height, Some(1.75));
        assert_eq!(args.records, vec!["3000,Running,30m", "6000,Walking,1h"]);
    }

    #[test]
    fn test_args_day_mode_with_file() {
        let args = Args::parse_from(["steptrack", "--day", "-f", "/tmp/steps.txt"]);
        assert!(args.day);
        assert_eq!(args.file.as_deref(), Some("/tmp/steps.txt"));
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["steptrack", "-c", "/custom/config.json", "--json"]);
        assert_eq!(args.config, "/custom/config.json");
        assert!(args.json);
    }

    #[test]
    fn test_args_negative_weight_is_accepted_by_parser() {
        let args = Args::parse_from(["steptrack", "-w", "-5", "3000,Running,30m"]);
        assert_eq!(args.weight, Some(-5.0));
    }
}
