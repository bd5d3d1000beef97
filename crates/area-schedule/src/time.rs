//! `HH:MM` wall-clock parsing.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, ScheduleError};

/// Parse a 24-hour `HH:MM` string into minutes since midnight.
///
/// `"00:00"` is 0 and `"23:59"` is 1439. Anything chrono cannot read with
/// `%H:%M` (including seconds, `24:00`, or an empty string) is an
/// [`ScheduleError::InvalidTimeFormat`].
pub fn minutes(time: &str) -> Result<u32> {
    let parsed = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTimeFormat(time.to_string()))?;
    Ok(parsed.hour() * 60 + parsed.minute())
}

/// Render minutes since midnight back into `HH:MM`.
///
/// Values past the end of the day wrap around.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boundaries() {
        assert_eq!(minutes("00:00").unwrap(), 0);
        assert_eq!(minutes("09:30").unwrap(), 570);
        assert_eq!(minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "9", "24:00", "12:60", "noon", "12-30"] {
            assert!(
                matches!(minutes(bad), Err(ScheduleError::InvalidTimeFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn format_pads_and_wraps() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(545), "09:05");
        assert_eq!(format_minutes(24 * 60 + 61), "01:01");
    }
}
