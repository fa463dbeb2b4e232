//! Pay calculation.
//!
//! This module turns a pair of raw shift boundaries into rounded
//! boundaries, a whole-minute duration and a pay amount to the cent.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::rounding::{duration_minutes, floor_to_grid};
use crate::error::{EngineError, EngineResult};
use crate::models::{RoundingMode, Settings, ShiftEntry};

/// Pay for a duration at an hourly rate, rounded half-up to the cent.
///
/// The multiplication happens before the division by 60 so that exact
/// results such as one minute at $15.00 stay exact.
///
/// # Example
///
/// ```
/// use shift_tracker::calculation::compute_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_pay(60, Decimal::new(1500, 2))?, Decimal::new(1500, 2));
/// assert_eq!(compute_pay(90, Decimal::new(2000, 2))?, Decimal::new(3000, 2));
/// assert_eq!(compute_pay(1, Decimal::new(1500, 2))?, Decimal::new(25, 2));
/// # Ok::<(), shift_tracker::error::EngineError>(())
/// ```
///
/// # Errors
///
/// Returns `InvalidInput` when the product does not fit in a `Decimal`.
pub fn compute_pay(duration_minutes: i64, hourly_rate: Decimal) -> EngineResult<Decimal> {
    Decimal::from(duration_minutes)
        .checked_mul(hourly_rate)
        .and_then(|total| total.checked_div(Decimal::from(60)))
        .map(|pay| pay.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| {
            EngineError::invalid_input(
                "hourly_rate",
                format!(
                    "pay for {} minutes at {} overflows",
                    duration_minutes, hourly_rate
                ),
            )
        })
}

/// Everything derived from a shift's raw boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCalculation {
    /// Raw start time.
    pub start_time: NaiveDateTime,
    /// Raw end time.
    pub end_time: NaiveDateTime,
    /// Start floored to the grid.
    pub rounded_start_time: NaiveDateTime,
    /// End floored to the grid.
    pub rounded_end_time: NaiveDateTime,
    /// Minutes between the rounded boundaries.
    pub duration_minutes: i64,
    /// Pay for `duration_minutes`.
    pub pay: Decimal,
}

/// Floors both boundaries, then derives duration and pay.
///
/// # Errors
///
/// Returns `InvalidInput` when `end` is not after `start`. Nothing is
/// computed in that case.
pub fn calculate_shift(
    start: NaiveDateTime,
    end: NaiveDateTime,
    mode: RoundingMode,
    hourly_rate: Decimal,
) -> EngineResult<ShiftCalculation> {
    if end <= start {
        return Err(EngineError::invalid_input(
            "end_time",
            format!("end time {} must be after start time {}", end, start),
        ));
    }

    let rounded_start_time = floor_to_grid(start, mode);
    let rounded_end_time = floor_to_grid(end, mode);
    let duration_minutes = duration_minutes(rounded_start_time, rounded_end_time);
    let pay = compute_pay(duration_minutes, hourly_rate)?;

    Ok(ShiftCalculation {
        start_time: start,
        end_time: end,
        rounded_start_time,
        rounded_end_time,
        duration_minutes,
        pay,
    })
}

/// Computes the add/edit screen preview for a manual entry.
pub fn preview_shift(entry: &ShiftEntry, settings: &Settings) -> EngineResult<ShiftCalculation> {
    calculate_shift(
        entry.start_time,
        entry.end_time,
        settings.rounding_mode,
        settings.hourly_rate,
    )
}
