//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **SessionRecord**: 検証済みのトレーニング記録
//! - **DaySteps**: 歩数と時間だけの短縮記録
//! - **ActivityKind**: 活動種別（ランニング / ウォーキング）
//! - **PhysicalProfile / ActivityMetrics**: 身体情報と計算結果

pub mod activity;
pub mod metrics;
pub mod session_record;
