//! # Record Repository Trait
//!
//! 記録文字列の読み込みを抽象化

use anyhow::Result;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// 記録リポジトリ
///
/// 1行1記録のソースから記録文字列を読み込む
#[cfg_attr(test, automock)]
pub trait RecordRepository: Send + Sync {
    /// 記録を読み込む
    ///
    /// # Arguments
    ///
    /// * `source` - 記録ファイルのパス
    ///
    /// # Returns
    ///
    /// 記録文字列のリスト（空行・コメント行は含まない）
    ///
    /// # Errors
    ///
    /// ソースの読み込みに失敗した場合にエラーを返す
    fn load_records(&self, source: &Path) -> Result<Vec<String>>;
}
