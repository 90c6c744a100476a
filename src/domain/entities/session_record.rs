//! # SessionRecord Entity
//!
//! 1回分のトレーニング記録（検証済み）

use chrono::TimeDelta;

use crate::domain::errors::{Field, TrackerError};

/// トレーニング記録
///
/// 歩数・活動種別・時間を保持する。`new` を通してのみ作成でき、
/// 歩数 ≤ 0、空の活動種別、時間 ≤ 0 の記録は存在しえない。
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    steps: i64,
    activity: String,
    duration: TimeDelta,
}

impl SessionRecord {
    /// 新しいトレーニング記録を作成
    ///
    /// # Arguments
    ///
    /// * `steps` - 歩数
    /// * `activity` - 活動種別（ラベルはそのまま保持する）
    /// * `duration` - トレーニング時間
    ///
    /// # Errors
    ///
    /// 歩数または時間が正でない場合、活動種別が空の場合にエラーを返す
    pub fn new(
        steps: i64,
        activity: impl Into<String>,
        duration: TimeDelta,
    ) -> Result<Self, TrackerError> {
        let activity = activity.into();
        if steps <= 0 {
            return Err(TrackerError::range(Field::Steps));
        }
        if activity.is_empty() {
            return Err(TrackerError::parse(Field::Activity, "must not be empty"));
        }
        if duration <= TimeDelta::zero() {
            return Err(TrackerError::range(Field::Duration));
        }

        Ok(Self {
            steps,
            activity,
            duration,
        })
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }
}

/// 歩数と時間だけの短縮記録（常にウォーキング扱い）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySteps {
    steps: i64,
    duration: TimeDelta,
}

impl DaySteps {
    /// 新しい短縮記録を作成
    ///
    /// # Errors
    ///
    /// 歩数または時間が正でない場合にエラーを返す
    pub fn new(steps: i64, duration: TimeDelta) -> Result<Self, TrackerError> {
        if steps <= 0 {
            return Err(TrackerError::range(Field::Steps));
        }
        if duration <= TimeDelta::zero() {
            return Err(TrackerError::range(Field::Duration));
        }
        Ok(Self { steps, duration })
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_record_new_valid() {
        let record = SessionRecord::new(3000, "Running", TimeDelta::minutes(30)).unwrap();
        assert_eq!(record.steps(), 3000);
        assert_eq!(record.activity(), "Running");
        assert_eq!(record.duration(), TimeDelta::minutes(30));
    }

    #[test]
    fn test_session_record_rejects_non_positive_steps() {
        for steps in [0, -1, -3000] {
            let err = SessionRecord::new(steps, "Walking", TimeDelta::minutes(10)).unwrap_err();
            assert_eq!(err, TrackerError::Range { field: Field::Steps });
        }
    }

    #[test]
    fn test_session_record_rejects_empty_activity() {
        let err = SessionRecord::new(100, "", TimeDelta::minutes(10)).unwrap_err();
        assert_eq!(err.field(), Some(Field::Activity));
    }

    #[test]
    fn test_session_record_rejects_non_positive_duration() {
        let zero = SessionRecord::new(100, "Walking", TimeDelta::zero()).unwrap_err();
        assert_eq!(zero, TrackerError::Range { field: Field::Duration });

        let negative = SessionRecord::new(100, "Walking", TimeDelta::minutes(-5)).unwrap_err();
        assert_eq!(negative, TrackerError::Range { field: Field::Duration });
    }

    #[test]
    fn test_day_steps_validation() {
        assert!(DaySteps::new(4000, TimeDelta::minutes(35)).is_ok());
        assert_eq!(
            DaySteps::new(0, TimeDelta::minutes(35)).unwrap_err(),
            TrackerError::Range { field: Field::Steps }
        );
        assert_eq!(
            DaySteps::new(4000, TimeDelta::minutes(-5)).unwrap_err(),
            TrackerError::Range { field: Field::Duration }
        );
    }
}
