//! File Record Repository Implementation
//!
//! RecordRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::repositories::record_repository::RecordRepository;

/// コメント行の先頭文字
const COMMENT_PREFIX: char = '#';

/// ファイルシステムベースの記録リポジトリ
pub struct FileRecordRepository;

impl FileRecordRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 記録ファイルの内容を記録のリストに分解する
    ///
    /// 空行と `#` で始まる行は除外する。行の中身はそのまま残す
    /// （空白の扱いはパーサーの責務）。
    fn split_records(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX)
            })
            .map(str::to_string)
            .collect()
    }
}

impl RecordRepository for FileRecordRepository {
    fn load_records(&self, source: &Path) -> Result<Vec<String>> {
        let path = PathBuf::from(shellexpand::tilde(&source.to_string_lossy()).as_ref());
        debug!("Reading records from {}", path.display());

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read record file: {}", path.display()))?;
        let records = Self::split_records(&content);

        info!("Found {} records in {}", records.len(), path.display());

        Ok(records)
    }
}

impl Default for FileRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_records_skips_blank_and_comment_lines() {
        let content = "# morning\n3000,Running,30m\n\n   \n  # evening\n4000,Walking,1h\n";
        let records = FileRecordRepository::split_records(content);
        assert_eq!(records, vec!["3000,Running,30m", "4000,Walking,1h"]);
    }

    #[test]
    fn test_split_records_keeps_line_whitespace() {
        let records = FileRecordRepository::split_records(" 4000,35m\r\n");
        assert_eq!(records, vec![" 4000,35m"]);
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3000,Running,30m").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "4000,35m").unwrap();

        let repo = FileRecordRepository::new();
        let records = repo.load_records(file.path()).unwrap();

        assert_eq!(records, vec!["3000,Running,30m", "4000,35m"]);
    }

    #[test]
    fn test_load_records_missing_file() {
        let repo = FileRecordRepository::default();
        let err = repo
            .load_records(Path::new("/nonexistent/sessions.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read record file"));
    }
}
