//! # Repository Traits
//!
//! 外部データへのアクセスを抽象化するtrait（実装はadapter層）

pub mod record_repository;

pub use record_repository::RecordRepository;
