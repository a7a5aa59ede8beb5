//! Compact duration literals (`"7d"`, `"12h"`, `"30m"`).
//!
//! A literal is an unsigned decimal magnitude immediately followed by a
//! single unit character. No whitespace, no sign, no fractions:
//!
//! | unit | meaning |
//! |------|---------|
//! | `s`  | seconds |
//! | `m`  | minutes |
//! | `h`  | hours   |
//! | `d`  | days    |
//! | `w`  | weeks   |

use super::error::ParameterError;
use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

/// Build a duration of whole days, saturating at `u64::MAX` seconds.
pub const fn days(n: u64) -> Duration {
    Duration::from_secs(n.saturating_mul(SECONDS_PER_DAY))
}

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(SECONDS_PER_MINUTE),
        'h' => Some(SECONDS_PER_HOUR),
        'd' => Some(SECONDS_PER_DAY),
        'w' => Some(SECONDS_PER_WEEK),
        _ => None,
    }
}

/// Parse a compact duration literal.
pub fn parse_duration(raw: &str) -> Result<Duration, ParameterError> {
    let invalid = |reason: &'static str| ParameterError::InvalidDuration {
        value: raw.to_string(),
        reason,
    };

    let Some(unit) = raw.chars().last() else {
        return Err(invalid("empty literal"));
    };
    let magnitude = &raw[..raw.len() - unit.len_utf8()];

    if magnitude.starts_with('-') {
        return Err(invalid("magnitude must be unsigned"));
    }
    if magnitude.is_empty() {
        return Err(invalid("missing magnitude"));
    }
    if !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("magnitude must be a decimal integer"));
    }

    let scale = unit_seconds(unit).ok_or_else(|| invalid("unknown unit"))?;
    let magnitude: u64 = magnitude.parse().map_err(|_| invalid("magnitude out of range"))?;
    let secs = magnitude
        .checked_mul(scale)
        .ok_or_else(|| invalid("magnitude out of range"))?;

    Ok(Duration::from_secs(secs))
}

/// Render a duration using the largest unit that divides it evenly.
///
/// Sub-second precision is dropped.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }
    for (unit, scale) in [
        ('w', SECONDS_PER_WEEK),
        ('d', SECONDS_PER_DAY),
        ('h', SECONDS_PER_HOUR),
        ('m', SECONDS_PER_MINUTE),
    ] {
        if secs % scale == 0 {
            return format!("{}{}", secs / scale, unit);
        }
    }
    format!("{}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_duration("1d").unwrap(), days(1));
        assert_eq!(parse_duration("7d").unwrap(), days(7));
    }

    #[test]
    fn test_days_saturates_instead_of_overflowing() {
        assert_eq!(days(u64::MAX), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_parse_other_units() {
        assert_eq!(parse_duration("45s").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_duration("30m").unwrap(), Duration::from_secs(1800));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("1w").unwrap(), days(7));
    }

    #[test]
    fn test_parse_zero_is_valid() {
        assert_eq!(parse_duration("0d").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = parse_duration("-1d").unwrap_err();
        assert!(matches!(
            err,
            ParameterError::InvalidDuration { reason: "magnitude must be unsigned", .. }
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_literals() {
        for raw in ["", "d", "7", "7x", " 7d", "7d ", "7 d", "+7d", "1.5d", "1h30m", "seven"] {
            assert!(parse_duration(raw).is_err(), "expected '{}' to be rejected", raw);
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_unit() {
        assert!(parse_duration("7é").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse_duration("99999999999999999999d").is_err());
        assert!(parse_duration(&format!("{}w", u64::MAX / 2)).is_err());
    }

    #[test]
    fn test_format_picks_largest_even_unit() {
        assert_eq!(format_duration(days(7)), "1w");
        assert_eq!(format_duration(days(3)), "3d");
        assert_eq!(format_duration(Duration::from_secs(7200)), "2h");
        assert_eq!(format_duration(Duration::from_secs(90)), "90s");
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn test_format_output_parses_back() {
        let window = Duration::from_secs(36 * 3600);
        assert_eq!(parse_duration(&format_duration(window)).unwrap(), window);
    }
}
