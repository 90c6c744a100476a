//! # Record Parser
//!
//! カンマ区切りの記録文字列を検証済みの記録に変換する

use crate::domain::entities::session_record::{DaySteps, SessionRecord};
use crate::domain::errors::{Field, TrackerError};
use crate::domain::services::duration::parse_duration;

/// フィールド区切り文字
pub const DELIMITER: char = ',';

const TRAINING_FORMAT: &str = "steps,activity,duration";
const DAY_STEPS_FORMAT: &str = "steps,duration";

fn parse_steps(text: &str) -> Result<i64, TrackerError> {
    let steps: i64 = text
        .parse()
        .map_err(|e| TrackerError::parse(Field::Steps, format!("{:?}: {}", text, e)))?;
    if steps <= 0 {
        return Err(TrackerError::range(Field::Steps));
    }
    Ok(steps)
}

/// `"<歩数>,<活動種別>,<時間>"` 形式の記録をパースする
///
/// 各フィールドは前後の空白を除去してから解釈する。
///
/// # Errors
///
/// フィールド数が3でない場合は `Format`、数値・時間の文法違反は
/// `FieldParse`、歩数・時間が正でない場合は `Range` を返す
pub fn parse_training(raw: &str) -> Result<SessionRecord, TrackerError> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    if parts.len() != 3 {
        return Err(TrackerError::Format {
            expected: TRAINING_FORMAT,
            found: parts.len(),
        });
    }

    let steps = parse_steps(parts[0].trim())?;

    let activity = parts[1].trim();
    if activity.is_empty() {
        return Err(TrackerError::parse(Field::Activity, "must not be empty"));
    }

    let duration = parse_duration(parts[2].trim())?;

    SessionRecord::new(steps, activity, duration)
}

/// `"<歩数>,<時間>"` 形式の短縮記録をパースする
///
/// 既存の記録フォーマットとの互換のため、歩数フィールドは空白を除去しない
/// （`" 4000,35m"` はエラーになる）。時間フィールドは除去する。
///
/// # Errors
///
/// `parse_training` と同じ分類でエラーを返す
pub fn parse_day_steps(raw: &str) -> Result<DaySteps, TrackerError> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    if parts.len() != 2 {
        return Err(TrackerError::Format {
            expected: DAY_STEPS_FORMAT,
            found: parts.len(),
        });
    }

    let steps = parse_steps(parts[0])?;
    let duration = parse_duration(parts[1].trim())?;

    DaySteps::new(steps, duration)
}
