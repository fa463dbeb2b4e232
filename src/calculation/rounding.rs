//! Time grid flooring and duration arithmetic.
//!
//! Shift boundaries are floored, never rounded to nearest: 16:44 on the
//! half-hour grid becomes 16:30, and on the hour grid 16:59 becomes 16:00.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::models::RoundingMode;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Floors a timestamp onto the rounding grid.
///
/// # Example
///
/// ```
/// use shift_tracker::calculation::floor_to_grid;
/// use shift_tracker::models::RoundingMode;
/// use chrono::NaiveDateTime;
///
/// let t = NaiveDateTime::parse_from_str("2026-01-15 16:44:12", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(floor_to_grid(t, RoundingMode::Hour).to_string(), "2026-01-15 16:00:00");
/// assert_eq!(floor_to_grid(t, RoundingMode::HalfHour).to_string(), "2026-01-15 16:30:00");
/// ```
pub fn floor_to_grid(timestamp: NaiveDateTime, mode: RoundingMode) -> NaiveDateTime {
    let minutes_past_grid = match mode {
        RoundingMode::Hour => timestamp.minute(),
        RoundingMode::HalfHour => timestamp.minute() % 30,
    };

    timestamp
        - Duration::minutes(i64::from(minutes_past_grid))
        - Duration::seconds(i64::from(timestamp.second()))
        - Duration::nanoseconds(i64::from(timestamp.nanosecond()))
}

/// Whole minutes from `start` to `end`, rounded half-up.
///
/// Negative when `end` precedes `start`; callers validate ordering first.
///
/// # Example
///
/// ```
/// use shift_tracker::calculation::duration_minutes;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 10:30:30", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(duration_minutes(start, end), 91);
/// ```
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis + MILLIS_PER_MINUTE / 2).div_euclid(MILLIS_PER_MINUTE)
}
