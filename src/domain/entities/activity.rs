//! # Activity Kind
//!
//! 活動種別と同義語ファミリー

use serde::Serialize;

use crate::domain::errors::TrackerError;

/// ランニングとして扱うラベル（小文字）
pub const RUNNING_LABELS: [&str; 3] = ["бег", "running", "run"];

/// ウォーキングとして扱うラベル（小文字）
pub const WALKING_LABELS: [&str; 3] = ["ходьба", "walking", "walk"];

/// 活動種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
}

impl ActivityKind {
    /// ラベルから活動種別を判定（大文字小文字を区別しない）
    ///
    /// # Errors
    ///
    /// どのファミリーにも一致しない場合に `UnknownActivity` を返す
    pub fn from_label(label: &str) -> Result<Self, TrackerError> {
        let normalized = label.to_lowercase();
        if RUNNING_LABELS.contains(&normalized.as_str()) {
            Ok(ActivityKind::Running)
        } else if WALKING_LABELS.contains(&normalized.as_str()) {
            Ok(ActivityKind::Walking)
        } else {
            Err(TrackerError::UnknownActivity(label.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_family_case_insensitive() {
        for label in ["Running", "RUN", "run", "Бег", "БЕГ", "running"] {
            assert_eq!(ActivityKind::from_label(label).unwrap(), ActivityKind::Running);
        }
    }

    #[test]
    fn test_walking_family_case_insensitive() {
        for label in ["Walking", "WALK", "walk", "Ходьба", "ХОДЬБА"] {
            assert_eq!(ActivityKind::from_label(label).unwrap(), ActivityKind::Walking);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = ActivityKind::from_label("Swimming").unwrap_err();
        assert_eq!(err, TrackerError::UnknownActivity("Swimming".to_string()));
    }

    #[test]
    fn test_partial_label_is_unknown() {
        assert!(ActivityKind::from_label("runner").is_err());
        assert!(ActivityKind::from_label("walking fast").is_err());
    }
}
