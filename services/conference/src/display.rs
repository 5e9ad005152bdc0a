//! Display formatting for meeting timestamps

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::{ConferenceError, ConferenceResult};

const TIME_FORMAT: &str = "%H:%M";
const DAY_FORMAT: &str = "%d %b %Y";

/// Time of day and calendar day of a meeting, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingTime {
    /// e.g. `22:13`
    pub time: String,
    /// e.g. `14 Nov 2023`
    pub day: String,
}

/// Format an epoch-milliseconds date string in the given offset
pub fn format_meeting_date(date: &str, offset: FixedOffset) -> ConferenceResult<MeetingTime> {
    let millis: i64 = date
        .trim()
        .parse()
        .map_err(|_| ConferenceError::InvalidDate(date.to_string()))?;

    let local = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ConferenceError::InvalidDate(date.to_string()))?
        .with_timezone(&offset);

    Ok(MeetingTime {
        time: local.format(TIME_FORMAT).to_string(),
        day: local.format(DAY_FORMAT).to_string(),
    })
}

/// Build a fixed offset from a number of minutes east of UTC
pub fn utc_offset(minutes: i32) -> ConferenceResult<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            ConferenceError::Configuration(format!("Invalid UTC offset: {} minutes", minutes))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_in_utc() {
        let offset = utc_offset(0).expect("valid offset");
        let formatted = format_meeting_date("1700000000000", offset).expect("valid date");

        assert_eq!(
            formatted,
            MeetingTime {
                time: "22:13".to_string(),
                day: "14 Nov 2023".to_string(),
            }
        );
    }

    #[test]
    fn test_format_crosses_day_with_offset() {
        let offset = utc_offset(120).expect("valid offset");
        let formatted = format_meeting_date("1700000000000", offset).expect("valid date");

        assert_eq!(formatted.time, "00:13");
        assert_eq!(formatted.day, "15 Nov 2023");
    }

    #[test]
    fn test_invalid_dates() {
        let offset = utc_offset(0).expect("valid offset");

        for date in ["", "tomorrow", "1.5e12", "9223372036854775807"] {
            assert!(
                matches!(format_meeting_date(date, offset), Err(ConferenceError::InvalidDate(_))),
                "{date:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_offset() {
        assert!(utc_offset(24 * 60).is_err());
        assert!(utc_offset(-90).is_ok());
    }
}
