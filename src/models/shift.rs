//! Shift model and related types.
//!
//! This module defines the finalized [`Shift`] record and the
//! [`ShiftEntry`] users submit when adding or editing a shift by hand.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::ShiftCalculation;

/// A finalized work shift.
///
/// Raw times record what was observed or entered; the rounded times are the
/// raw times floored to the rounding grid and are what duration and pay are
/// derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Raw start time.
    pub start_time: NaiveDateTime,
    /// Raw end time.
    pub end_time: NaiveDateTime,
    /// Start time floored to the rounding grid.
    pub rounded_start_time: NaiveDateTime,
    /// End time floored to the rounding grid.
    pub rounded_end_time: NaiveDateTime,
    /// Whole minutes between the rounded times.
    pub duration_minutes: i64,
    /// Pay for the rounded duration, to the cent.
    pub pay: Decimal,
    /// Optional user notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// True when entered by hand rather than detected.
    pub is_manual: bool,
}

impl Shift {
    /// Builds a shift from a completed calculation.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::calculation::calculate_shift;
    /// use shift_tracker::models::{RoundingMode, Shift};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 09:12:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-15 17:05:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let calculation = calculate_shift(start, end, RoundingMode::Hour, Decimal::new(2000, 2)).unwrap();
    ///
    /// let shift = Shift::from_calculation("shift_001", &calculation, None, false);
    /// assert_eq!(shift.duration_minutes, 480);
    /// assert_eq!(shift.pay, Decimal::new(16000, 2));
    /// ```
    pub fn from_calculation(
        id: impl Into<String>,
        calculation: &ShiftCalculation,
        notes: Option<String>,
        is_manual: bool,
    ) -> Self {
        Self {
            id: id.into(),
            start_time: calculation.start_time,
            end_time: calculation.end_time,
            rounded_start_time: calculation.rounded_start_time,
            rounded_end_time: calculation.rounded_end_time,
            duration_minutes: calculation.duration_minutes,
            pay: calculation.pay,
            notes,
            is_manual,
        }
    }

    /// Generates a fresh shift id.
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Duration expressed in hours.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration_minutes) / Decimal::from(60)
    }
}

/// A shift as typed in by the user on the add/edit screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Raw start time.
    pub start_time: NaiveDateTime,
    /// Raw end time. Must be after `start_time`.
    pub end_time: NaiveDateTime,
    /// Optional notes; blank notes are dropped.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftEntry {
    /// Notes trimmed, with blank notes treated as absent.
    pub fn cleaned_notes(&self) -> Option<String> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_shift;
    use crate::models::RoundingMode;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_shift() -> Shift {
        let calculation = calculate_shift(
            make_datetime("2026-01-15 09:00:00"),
            make_datetime("2026-01-15 10:30:00"),
            RoundingMode::HalfHour,
            Decimal::new(2000, 2),
        )
        .unwrap();
        Shift::from_calculation("shift_001", &calculation, Some("Stocktake".to_string()), true)
    }

    #[test]
    fn test_from_calculation_copies_fields() {
        let shift = make_shift();
        assert_eq!(shift.id, "shift_001");
        assert_eq!(shift.duration_minutes, 90);
        assert_eq!(shift.pay, Decimal::new(3000, 2));
        assert_eq!(shift.notes.as_deref(), Some("Stocktake"));
        assert!(shift.is_manual);
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(make_shift().duration_hours(), Decimal::new(15, 1));
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(Shift::new_id(), Shift::new_id());
    }

    #[test]
    fn test_shift_serialization() {
        let shift = make_shift();
        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_notes_omitted_when_absent() {
        let mut shift = make_shift();
        shift.notes = None;
        let json = serde_json::to_string(&shift).unwrap();
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_entry_notes_are_trimmed() {
        let entry = ShiftEntry {
            start_time: make_datetime("2026-01-15 09:00:00"),
            end_time: make_datetime("2026-01-15 17:00:00"),
            notes: Some("  covered for Sam  ".to_string()),
        };
        assert_eq!(entry.cleaned_notes().as_deref(), Some("covered for Sam"));

        let blank = ShiftEntry {
            notes: Some("   ".to_string()),
            ..entry
        };
        assert_eq!(blank.cleaned_notes(), None);
    }
}
