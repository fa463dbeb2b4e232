//! Weekly summary models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one calendar day of a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    /// The day.
    pub date: NaiveDate,
    /// Ids of shifts starting on this day.
    pub shift_ids: Vec<String>,
    /// Sum of rounded shift durations.
    pub minutes: i64,
    /// Sum of shift pay.
    pub pay: Decimal,
}

/// Totals for a Monday-to-Sunday week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// The Sunday the week ends on.
    pub week_end: NaiveDate,
    /// Sum of rounded shift durations in the week.
    pub total_minutes: i64,
    /// Sum of shift pay in the week.
    pub total_pay: Decimal,
    /// Number of shifts starting in the week.
    pub total_shifts: usize,
    /// Seven entries, Monday first.
    pub days: Vec<DailyBreakdown>,
}
