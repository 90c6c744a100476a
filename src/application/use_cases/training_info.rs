//! # Training Info Use Case
//!
//! 完全な記録（歩数・活動種別・時間）からトレーニングレポートを作成する

use std::fmt;

use log::error;
use serde::Serialize;

use crate::domain::entities::activity::ActivityKind;
use crate::domain::entities::metrics::ActivityMetrics;
use crate::domain::errors::{Field, TrackerError};
use crate::domain::services::calculator::{distance_km, mean_speed_kmh, spent_calories};
use crate::domain::services::duration::as_hours;
use crate::domain::services::record_parser::parse_training;

/// トレーニングのサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    /// 記録に書かれたままの活動種別ラベル
    pub activity: String,
    pub kind: ActivityKind,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: ActivityMetrics,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
            self.activity,
            self.duration_hours,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories,
        )
    }
}

/// 記録をパースしてトレーニングのサマリーを作成
///
/// 失敗はすべてログに出力したうえで呼び出し側に返す
///
/// # Arguments
///
/// * `raw` - `"<歩数>,<活動種別>,<時間>"` 形式の記録
/// * `weight` - 体重（kg）
/// * `height` - 身長（m）
///
/// # Errors
///
/// パース失敗、体重・身長が正でない、未知の活動種別、カロリー計算失敗
pub fn summarize_training(
    raw: &str,
    weight: f64,
    height: f64,
) -> Result<TrainingSummary, TrackerError> {
    let record = parse_training(raw).inspect_err(|e| {
        error!("Failed to parse training record {:?}: {}", raw, e);
    })?;

    // カロリー計算側でも検証されるが、ここで先に弾く
    if weight <= 0.0 || weight.is_nan() {
        let err = TrackerError::range(Field::Weight);
        error!("Invalid profile: {}", err);
        return Err(err);
    }
    if height <= 0.0 || height.is_nan() {
        let err = TrackerError::range(Field::Height);
        error!("Invalid profile: {}", err);
        return Err(err);
    }

    let kind = ActivityKind::from_label(record.activity()).inspect_err(|e| {
        error!("{}", e);
    })?;

    let calories = spent_calories(kind, record.steps(), weight, height, record.duration())
        .inspect_err(|e| {
            error!("Failed to compute calories for {:?}: {}", raw, e);
        })?;

    let metrics = ActivityMetrics {
        distance_km: distance_km(record.steps(), height),
        mean_speed_kmh: mean_speed_kmh(record.steps(), height, record.duration()),
        calories,
    };

    Ok(TrainingSummary {
        activity: record.activity().to_string(),
        kind,
        duration_hours: as_hours(record.duration()),
        metrics,
    })
}

/// トレーニングレポート（テキスト）を作成
///
/// # Errors
///
/// `summarize_training` と同じ
pub fn training_info(raw: &str, weight: f64, height: f64) -> Result<String, TrackerError> {
    summarize_training(raw, weight, height).map(|summary| summary.to_string())
}
