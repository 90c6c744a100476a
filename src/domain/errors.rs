//! # Domain Errors
//!
//! セッション記録のパース・計算で発生するエラー

use std::fmt;

use thiserror::Error;

/// エラーの原因となったフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Steps,
    Activity,
    Duration,
    Weight,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Steps => "step count",
            Field::Activity => "activity",
            Field::Duration => "duration",
            Field::Weight => "weight",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}

/// トラッカーのドメインエラー
///
/// どのフィールドがなぜ失敗したかを必ず保持する
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// フィールド数が合わない
    #[error("invalid record format: expected '{expected}', got {found} field(s)")]
    Format { expected: &'static str, found: usize },

    /// フィールドの文字列が期待する文法に合わない
    #[error("invalid {field}: {reason}")]
    FieldParse { field: Field, reason: String },

    /// 値が正でない
    #[error("{field} must be greater than 0")]
    Range { field: Field },

    #[error("unknown training type: {0}")]
    UnknownActivity(String),

    /// 派生値（速度）が計算できない
    #[error("computation failed: {0}")]
    Computation(String),
}

impl TrackerError {
    pub(crate) fn parse(field: Field, reason: impl Into<String>) -> Self {
        TrackerError::FieldParse {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn range(field: Field) -> Self {
        TrackerError::Range { field }
    }

    /// エラーの原因となったフィールド（あれば）
    pub fn field(&self) -> Option<Field> {
        match self {
            TrackerError::FieldParse { field, .. } | TrackerError::Range { field } => Some(*field),
            _ => None,
        }
    }
}
