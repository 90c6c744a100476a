//! # Session Report
//!
//! 完全な記録と短縮記録を、同じ「セッションレポート」機能の2つの形式として扱う。
//! 計算式は共有し、エラーの扱いはそれぞれの契約を保つ。

use log::debug;
use serde::Serialize;

use crate::application::dto::report_config::{OutputStyle, ReportConfig, ReportFormat};
use crate::application::use_cases::day_action_info::{day_action_info, summarize_day};
use crate::application::use_cases::training_info::{summarize_training, training_info};
use crate::domain::errors::TrackerError;

/// 1件の記録に対する結果
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// レポート本文（テキストまたはJSON）
    Report(String),
    /// 完全な記録の失敗（原因付き）
    Failed(TrackerError),
    /// 短縮記録の失敗（原因はログのみ）
    Empty,
}

impl RecordOutcome {
    pub fn is_report(&self) -> bool {
        matches!(self, RecordOutcome::Report(_))
    }
}

/// セッションレポート
pub struct SessionReport {
    config: ReportConfig,
}

impl SessionReport {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 1件の記録をレポートにする
    pub fn render(&self, raw: &str) -> RecordOutcome {
        let weight = self.config.profile.weight_kg;
        let height = self.config.profile.height_m;
        debug!("Rendering {:?} as {:?}", raw, self.config.format);

        match (self.config.format, self.config.output) {
            (ReportFormat::Training, OutputStyle::Text) => match training_info(raw, weight, height) {
                Ok(report) => RecordOutcome::Report(report),
                Err(e) => RecordOutcome::Failed(e),
            },
            (ReportFormat::Training, OutputStyle::Json) => {
                match summarize_training(raw, weight, height) {
                    Ok(summary) => to_json(&summary),
                    Err(e) => RecordOutcome::Failed(e),
                }
            }
            (ReportFormat::DaySteps, OutputStyle::Text) => {
                let report = day_action_info(raw, weight, height);
                if report.is_empty() {
                    RecordOutcome::Empty
                } else {
                    RecordOutcome::Report(report)
                }
            }
            (ReportFormat::DaySteps, OutputStyle::Json) => match summarize_day(raw, weight, height) {
                Some(summary) => to_json(&summary),
                None => RecordOutcome::Empty,
            },
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> RecordOutcome {
    match serde_json::to_string(value) {
        Ok(json) => RecordOutcome::Report(json),
        // 非有限な浮動小数点はnullとして出力されるため通常は到達しない
        Err(e) => RecordOutcome::Failed(TrackerError::Computation(e.to_string())),
    }
}
