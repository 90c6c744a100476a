//! Adapter Layer
//!
//! 外部システム（設定ファイル, ファイルシステム）との統合

pub mod config;
pub mod repositories;
