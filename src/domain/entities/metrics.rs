//! # Physical Profile / Activity Metrics
//!
//! 利用者の身体情報と計算結果のバリューオブジェクト

use serde::{Deserialize, Serialize};

/// 身体情報（呼び出し側が与える）
///
/// 正であることの検証は、この値を使う計算側で行う
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    /// 体重（kg）
    pub weight_kg: f64,
    /// 身長（m）
    pub height_m: f64,
}

impl PhysicalProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// トレーニングから導出される指標
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}
