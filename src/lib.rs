//! # Steptrack
//!
//! 歩数ベースのトレーニング記録から距離・平均速度・消費カロリーを計算するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 記録のパースと計算式（外部依存なし）
//! - **Application層**: レポート作成のユースケース
//! - **Adapter層**: 設定ファイルと記録ファイルの読み込み
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use application::use_cases::day_action_info::day_action_info;
pub use application::use_cases::training_info::training_info;
pub use domain::errors::TrackerError;
