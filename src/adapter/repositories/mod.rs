//! Repository Implementations
//!
//! Domain層のRepository traitの実装

pub mod file_record_repository;

pub use file_record_repository::FileRecordRepository;
