//! # Calculator
//!
//! 距離・平均速度・消費カロリーの計算式

use chrono::TimeDelta;

use crate::domain::entities::activity::ActivityKind;
use crate::domain::errors::{Field, TrackerError};
use crate::domain::services::duration::{as_hours, as_minutes};

/// 平均的な歩幅（m）
pub const AVERAGE_STEP_LENGTH_M: f64 = 0.65;
/// 1kmあたりのメートル数
pub const METERS_IN_KM: f64 = 1000.0;
/// 1時間あたりの分数
pub const MINUTES_IN_HOUR: f64 = 60.0;
/// 身長から歩幅を求める係数
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// ウォーキングのカロリー係数
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// 身長から歩幅（m）を求める
///
/// 計算結果が0以下の場合は平均的な歩幅を使う
pub fn step_length(height: f64) -> f64 {
    let length = height * STEP_LENGTH_COEFFICIENT;
    if length <= 0.0 {
        AVERAGE_STEP_LENGTH_M
    } else {
        length
    }
}

/// 歩幅を指定して距離（km）を求める
pub fn distance_km_for_step(steps: i64, step_length_m: f64) -> f64 {
    steps as f64 * step_length_m / METERS_IN_KM
}

/// 歩数と身長から距離（km）を求める
pub fn distance_km(steps: i64, height: f64) -> f64 {
    distance_km_for_step(steps, step_length(height))
}

/// 平均速度（km/h）
///
/// 時間が0以下の場合はエラーではなく0を返す
pub fn mean_speed_kmh(steps: i64, height: f64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }

    let hours = as_hours(duration);
    if hours <= 0.0 {
        return 0.0;
    }

    distance_km(steps, height) / hours
}

fn validate_inputs(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<(), TrackerError> {
    if steps <= 0 {
        return Err(TrackerError::range(Field::Steps));
    }
    if weight <= 0.0 || weight.is_nan() {
        return Err(TrackerError::range(Field::Weight));
    }
    if height <= 0.0 || height.is_nan() {
        return Err(TrackerError::range(Field::Height));
    }
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::range(Field::Duration));
    }
    Ok(())
}

fn base_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    validate_inputs(steps, weight, height, duration)?;

    let speed = mean_speed_kmh(steps, height, duration);
    if speed <= 0.0 {
        return Err(TrackerError::Computation(
            "speed could not be computed".to_string(),
        ));
    }

    Ok(weight * speed * as_minutes(duration) / MINUTES_IN_HOUR)
}

/// ランニングの消費カロリー
///
/// # Errors
///
/// 歩数・体重・身長・時間のいずれかが正でない場合は `Range`、
/// 速度が計算できない場合は `Computation` を返す
pub fn running_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    base_calories(steps, weight, height, duration)
}

/// ウォーキングの消費カロリー
///
/// ランニングと同じ検証・計算に `WALKING_CALORIES_COEFFICIENT` を掛ける
///
/// # Errors
///
/// `running_spent_calories` と同じ
pub fn walking_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    Ok(base_calories(steps, weight, height, duration)? * WALKING_CALORIES_COEFFICIENT)
}

/// 活動種別に応じた消費カロリー
pub fn spent_calories(
    kind: ActivityKind,
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64, TrackerError> {
    match kind {
        ActivityKind::Running => running_spent_calories(steps, weight, height, duration),
        ActivityKind::Walking => walking_spent_calories(steps, weight, height, duration),
    }
}
