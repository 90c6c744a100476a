//! # Day Action Info Use Case
//!
//! 短縮記録（歩数・時間）から1日の活動レポートを作成する。
//! 失敗はログに出力するだけで、呼び出し側には空文字列しか返さない。

use std::fmt;

use log::error;
use serde::Serialize;

use crate::domain::errors::TrackerError;
use crate::domain::services::calculator::{
    distance_km_for_step, walking_spent_calories, AVERAGE_STEP_LENGTH_M,
};
use crate::domain::services::record_parser::parse_day_steps;

/// 1日の活動サマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step count: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
            self.steps, self.distance_km, self.calories,
        )
    }
}

fn try_summarize_day(raw: &str, weight: f64, height: f64) -> Result<DaySummary, TrackerError> {
    let record = parse_day_steps(raw)?;
    let calories = walking_spent_calories(record.steps(), weight, height, record.duration())?;

    Ok(DaySummary {
        steps: record.steps(),
        distance_km: distance_km_for_step(record.steps(), AVERAGE_STEP_LENGTH_M),
        calories,
    })
}

/// 短縮記録から1日の活動サマリーを作成
///
/// 活動種別は常にウォーキング、距離は平均的な歩幅で計算する。
/// 失敗した場合はログに出力して `None` を返す。
pub fn summarize_day(raw: &str, weight: f64, height: f64) -> Option<DaySummary> {
    match try_summarize_day(raw, weight, height) {
        Ok(summary) => Some(summary),
        Err(e) => {
            error!("Failed to build day report for {:?}: {}", raw, e);
            None
        }
    }
}

/// 1日の活動レポート（テキスト）を作成
///
/// 失敗時は空文字列を返す。体重・身長が不正でカロリーを計算できない場合も
/// 空文字列になる（以前の形式のように 0.00 kcal のレポートは出さない）。
pub fn day_action_info(raw: &str, weight: f64, height: f64) -> String {
    summarize_day(raw, weight, height)
        .map(|summary| summary.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_day_action_info_report() {
        let report = day_action_info("4000,35m", 75.0, 1.75);

        let calories = walking_spent_calories(4000, 75.0, 1.75, TimeDelta::minutes(35)).unwrap();
        let expected = format!(
            "Step count: 4000.\nDistance: 2.60 km.\nCalories burned: {:.2} kcal.\n",
            calories
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_day_action_info_negative_duration_is_empty() {
        assert_eq!(day_action_info("4000,-5m", 75.0, 1.75), "");
    }

    #[test]
    fn test_day_action_info_failures_are_empty() {
        for raw in ["", "4000", "4000,Walking,35m", "abc,35m", "0,35m", " 4000,35m", "4000,soon"] {
            assert_eq!(day_action_info(raw, 75.0, 1.75), "", "input {:?}", raw);
        }
    }

    #[test]
    fn test_day_action_info_invalid_profile_is_empty_not_zero_calories() {
        assert_eq!(day_action_info("4000,35m", 0.0, 1.75), "");
        assert_eq!(day_action_info("4000,35m", 75.0, 0.0), "");
    }

    #[test]
    fn test_summarize_day_uses_average_step_length() {
        // 身長に関わらず距離は平均的な歩幅で決まる
        let short = summarize_day("10000,1h", 60.0, 1.5).unwrap();
        let tall = summarize_day("10000,1h", 60.0, 2.0).unwrap();
        assert!((short.distance_km - 6.5).abs() < 1e-9);
        assert_eq!(short.distance_km, tall.distance_km);
        assert!(tall.calories > short.calories);
    }
}
