//! Shift-ended notifications.
//!
//! When the tracker finalizes a shift it hands the record to a
//! [`Notifier`]. Finalized shifts are not saved automatically: the shipped
//! [`PendingShiftInbox`] holds them until the user confirms or discards
//! them.

mod inbox;

pub use inbox::PendingShiftInbox;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::Shift;

/// Receives finalized shifts for user confirmation.
///
/// Delivery is fire-and-forget from the tracker's point of view: an error
/// is logged and never rolls back the dwell state.
pub trait Notifier: Send + Sync {
    /// Delivers a shift-ended event.
    fn notify_shift_ended(&self, shift: &Shift) -> EngineResult<()>;
}

/// The user-facing message for a finalized shift.
///
/// # Example
///
/// ```
/// use shift_tracker::calculation::calculate_shift;
/// use shift_tracker::models::{RoundingMode, Shift};
/// use shift_tracker::notify::ShiftEndedNotification;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let calculation = calculate_shift(
///     parse("2026-01-15 09:10:00"),
///     parse("2026-01-15 17:20:00"),
///     RoundingMode::Hour,
///     Decimal::new(1500, 2),
/// ).unwrap();
/// let shift = Shift::from_calculation("shift_001", &calculation, None, false);
///
/// let notification = ShiftEndedNotification::for_shift(&shift);
/// assert_eq!(notification.body, "Shift from 09:00 to 17:00. Log it?");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEndedNotification {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// The finalized, not yet saved, shift.
    pub shift: Shift,
}

impl ShiftEndedNotification {
    /// Builds the notification copy from the shift's rounded times.
    pub fn for_shift(shift: &Shift) -> Self {
        Self {
            title: "Shift Ended".to_string(),
            body: format!(
                "Shift from {} to {}. Log it?",
                shift.rounded_start_time.format("%H:%M"),
                shift.rounded_end_time.format("%H:%M")
            ),
            shift: shift.clone(),
        }
    }
}
