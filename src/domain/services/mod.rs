//! # Domain Services
//!
//! 記録のパースと指標計算のビジネスルール
//!
//! - **duration**: 時間表記の文法
//! - **record_parser**: 記録文字列のパースと検証
//! - **calculator**: 距離・速度・カロリーの計算式

pub mod calculator;
pub mod duration;
pub mod record_parser;
