//! Weekly totals.
//!
//! Weeks run Monday to Sunday. A shift belongs to the day its raw start
//! time falls on, so an overnight shift counts entirely toward the day it
//! began.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{DailyBreakdown, Shift, WeeklySummary};

/// Returns the Monday and Sunday of the week containing `date`.
///
/// # Example
///
/// ```
/// use shift_tracker::calculation::week_bounds;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday
/// let (start, end) = week_bounds(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (start, start + Duration::days(6))
}

/// Totals the shifts that start in the week containing `date`.
pub fn summarize_week(shifts: &[Shift], date: NaiveDate) -> WeeklySummary {
    let (week_start, week_end) = week_bounds(date);

    let days: Vec<DailyBreakdown> = (0..7)
        .map(|offset| {
            let day = week_start + Duration::days(offset);
            let day_shifts: Vec<&Shift> = shifts
                .iter()
                .filter(|shift| shift.start_time.date() == day)
                .collect();

            DailyBreakdown {
                date: day,
                shift_ids: day_shifts.iter().map(|shift| shift.id.clone()).collect(),
                minutes: day_shifts.iter().map(|shift| shift.duration_minutes).sum(),
                pay: day_shifts.iter().map(|shift| shift.pay).sum(),
            }
        })
        .collect();

    WeeklySummary {
        week_start,
        week_end,
        total_minutes: days.iter().map(|day| day.minutes).sum(),
        total_pay: days.iter().map(|day| day.pay).sum::<Decimal>(),
        total_shifts: days.iter().map(|day| day.shift_ids.len()).sum(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_shift;
    use crate::models::RoundingMode;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_shift(id: &str, start: &str, end: &str) -> Shift {
        let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        let calculation = calculate_shift(
            parse(start),
            parse(end),
            RoundingMode::Hour,
            Decimal::from_str("20.00").unwrap(),
        )
        .unwrap();
        Shift::from_calculation(id, &calculation, None, false)
    }

    #[test]
    fn test_week_bounds_on_monday() {
        let (start, end) = week_bounds(make_date("2026-01-12"));
        assert_eq!(start, make_date("2026-01-12"));
        assert_eq!(end, make_date("2026-01-18"));
    }

    #[test]
    fn test_week_bounds_on_sunday() {
        // Sunday belongs to the week that started the previous Monday
        let (start, end) = week_bounds(make_date("2026-01-18"));
        assert_eq!(start, make_date("2026-01-12"));
        assert_eq!(end, make_date("2026-01-18"));
    }

    #[test]
    fn test_summary_totals_and_breakdown() {
        let shifts = vec![
            make_shift("a", "2026-01-13 09:00:00", "2026-01-13 17:00:00"),
            make_shift("b", "2026-01-13 18:00:00", "2026-01-13 20:00:00"),
            make_shift("c", "2026-01-17 10:00:00", "2026-01-17 14:00:00"),
            make_shift("outside", "2026-01-19 09:00:00", "2026-01-19 17:00:00"),
        ];

        let summary = summarize_week(&shifts, make_date("2026-01-15"));

        assert_eq!(summary.week_start, make_date("2026-01-12"));
        assert_eq!(summary.total_shifts, 3);
        assert_eq!(summary.total_minutes, 14 * 60);
        assert_eq!(summary.total_pay, Decimal::from(280));
        assert_eq!(summary.days.len(), 7);
        assert_eq!(summary.days[1].shift_ids, vec!["a", "b"]);
        assert_eq!(summary.days[1].minutes, 600);
        assert_eq!(summary.days[5].pay, Decimal::from(80));
        assert!(summary.days[0].shift_ids.is_empty());
    }

    #[test]
    fn test_overnight_shift_counts_on_start_day() {
        let shifts = vec![make_shift(
            "night",
            "2026-01-18 22:00:00",
            "2026-01-19 06:00:00",
        )];

        let summary = summarize_week(&shifts, make_date("2026-01-18"));
        assert_eq!(summary.total_shifts, 1);
        assert_eq!(summary.days[6].minutes, 480);

        let next_week = summarize_week(&shifts, make_date("2026-01-19"));
        assert_eq!(next_week.total_shifts, 0);
        assert_eq!(next_week.total_pay, Decimal::ZERO);
    }
}
