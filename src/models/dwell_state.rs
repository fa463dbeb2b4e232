//! The tracker's persisted working memory.
//!
//! Exactly one [`DwellState`] exists for the configured workplace. The phase
//! enum makes the IDLE / PENDING / ACTIVE invariants structural: a pending
//! dwell always has an entry time, an active shift always has a start time,
//! and the two can never be set together.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Where the tracker is in the dwell-confirmation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DwellPhase {
    /// No shift in progress.
    #[default]
    Idle,
    /// Inside the geofence since `entry_time`, not yet confirmed.
    Pending {
        /// When the current dwell began.
        entry_time: NaiveDateTime,
    },
    /// A confirmed shift, backdated to the original entry.
    Active {
        /// When the shift started (the entry moment, not the confirmation).
        start_time: NaiveDateTime,
    },
}

/// The single-row dwell record owned by the shift tracker.
///
/// # Example
///
/// ```
/// use shift_tracker::models::DwellState;
///
/// let state = DwellState::default();
/// assert!(!state.is_active());
/// assert!(state.entry_time().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DwellState {
    /// Current phase with its timestamp.
    #[serde(flatten)]
    pub phase: DwellPhase,
    /// Position of the most recent sample that carried coordinates.
    #[serde(default)]
    pub last_known_location: Option<Coordinates>,
}

impl DwellState {
    /// Whether a confirmed shift is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, DwellPhase::Active { .. })
    }

    /// Start of the active shift, if any.
    pub fn active_start_time(&self) -> Option<NaiveDateTime> {
        match self.phase {
            DwellPhase::Active { start_time } => Some(start_time),
            _ => None,
        }
    }

    /// Start of the unconfirmed dwell, if any.
    pub fn entry_time(&self) -> Option<NaiveDateTime> {
        match self.phase {
            DwellPhase::Pending { entry_time } => Some(entry_time),
            _ => None,
        }
    }
}
