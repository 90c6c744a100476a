//! # Duration Grammar
//!
//! `45m`, `1h30m`, `1.5h`, `-5m` のようなコンパクトな時間表記のパース

use chrono::TimeDelta;

use crate::domain::errors::{Field, TrackerError};

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
const NANOS_PER_MINUTE: f64 = 60_000_000_000.0;

// 小数部はナノ秒精度を超える桁を捨てる
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

fn invalid(original: &str) -> TrackerError {
    TrackerError::parse(Field::Duration, format!("invalid duration {:?}", original))
}

fn overflow(original: &str) -> TrackerError {
    TrackerError::parse(Field::Duration, format!("duration {:?} out of range", original))
}

/// 時間表記をパースする
///
/// 符号（`+`/`-`）の後に `<数値><単位>` を1つ以上並べた形式。
/// 単位は `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`。
/// 単位なしで許されるのは `0` のみ。
///
/// # Errors
///
/// 空文字列、単位なし、未知の単位、数値の不正、範囲外の場合に
/// `FieldParse` エラーを返す
pub fn parse_duration(text: &str) -> Result<TimeDelta, TrackerError> {
    let original = text;
    let mut s = text;
    let mut negative = false;

    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(invalid(original));
    }

    let mut total: u128 = 0;

    while !s.is_empty() {
        let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, mut rest) = s.split_at(int_len);

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid(original));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        if unit.is_empty() {
            return Err(TrackerError::parse(
                Field::Duration,
                format!("missing unit in duration {:?}", original),
            ));
        }
        let scale = unit_nanos(unit).ok_or_else(|| {
            TrackerError::parse(
                Field::Duration,
                format!("unknown unit {:?} in duration {:?}", unit, original),
            )
        })?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| overflow(original))?
        };
        let mut value = whole.checked_mul(scale).ok_or_else(|| overflow(original))?;

        if !frac_part.is_empty() {
            let digits = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits.parse().map_err(|_| invalid(original))?;
            value = value
                .checked_add(numerator * scale / 10u128.pow(digits.len() as u32))
                .ok_or_else(|| overflow(original))?;
        }

        total = total
            .checked_add(value)
            .ok_or_else(|| overflow(original))?;
        if total > i64::MAX as u128 + 1 {
            return Err(overflow(original));
        }

        s = &rest[unit_len..];
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    let nanos = i64::try_from(signed).map_err(|_| overflow(original))?;

    Ok(TimeDelta::nanoseconds(nanos))
}

/// 時間を時間単位（h）の実数で返す
pub fn as_hours(duration: TimeDelta) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        None => duration.num_seconds() as f64 / 3_600.0,
    }
}

/// 時間を分単位の実数で返す
pub fn as_minutes(duration: TimeDelta) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_MINUTE,
        None => duration.num_seconds() as f64 / 60.0,
    }
}
