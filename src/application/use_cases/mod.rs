//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **training_info**: 完全な記録のトレーニングレポート
//! - **day_action_info**: 短縮記録の1日の活動レポート
//! - **session_report**: 2つの形式をまとめたセッションレポート
//! - **ReportBatchUseCase**: 複数記録の一括レポート

pub mod day_action_info;
pub mod report_batch;
pub mod session_report;
pub mod training_info;
