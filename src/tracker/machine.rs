//! The dwell-confirmation transition function.
//!
//! [`advance`] is pure: it takes the current [`DwellState`], one
//! [`Observation`] and the confirmation threshold, and returns the next
//! state together with what happened. Polled samples and platform boundary
//! events both reduce to an observation, so there is exactly one set of
//! transition rules:
//!
//! | phase   | inside                                   | not inside                 |
//! |---------|------------------------------------------|----------------------------|
//! | idle    | pending, entry = now                     | unchanged                  |
//! | pending | active (start = entry) once threshold met | idle, dwell abandoned     |
//! | active  | unchanged                                | idle, shift ended at now   |

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, DwellPhase, DwellState, ZoneClassification};

/// A zone assertion at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// The zone the device was in.
    pub zone: ZoneClassification,
    /// When the zone was observed.
    pub observed_at: NaiveDateTime,
    /// Position, when the source reported one.
    pub location: Option<Coordinates>,
}

/// What a single observation did to the dwell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DwellEvent {
    /// Not inside and no dwell in progress.
    Idle,
    /// A new dwell started.
    Entered,
    /// Still inside, threshold not yet reached.
    Dwelling,
    /// The dwell met the threshold and became a shift.
    Confirmed,
    /// Left before the threshold; nothing is recorded.
    Abandoned,
    /// Still inside an active shift.
    Continued,
    /// Left during an active shift.
    Ended {
        /// Raw shift start (the original entry time).
        start_time: NaiveDateTime,
        /// Raw shift end (the exit observation).
        end_time: NaiveDateTime,
    },
    /// An exit observed no later than the shift start; ignored.
    StaleExit,
}

/// The result of applying one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// State to persist.
    pub next: DwellState,
    /// The transition taken.
    pub event: DwellEvent,
}

/// Applies one observation to the dwell state.
///
/// # Example
///
/// ```
/// use shift_tracker::models::{DwellPhase, DwellState, ZoneClassification};
/// use shift_tracker::tracker::{DwellEvent, Observation, advance};
/// use chrono::{Duration, NaiveDateTime};
///
/// let t0 = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let inside = |at| Observation { zone: ZoneClassification::Inside, observed_at: at, location: None };
///
/// let step = advance(&DwellState::default(), &inside(t0), Duration::hours(1));
/// assert_eq!(step.event, DwellEvent::Entered);
///
/// let step = advance(&step.next, &inside(t0 + Duration::minutes(61)), Duration::hours(1));
/// assert_eq!(step.event, DwellEvent::Confirmed);
/// assert_eq!(step.next.phase, DwellPhase::Active { start_time: t0 });
/// ```
pub fn advance(state: &DwellState, observation: &Observation, threshold: Duration) -> Step {
    let now = observation.observed_at;
    let location = observation.location.or(state.last_known_location);
    let inside = observation.zone.is_inside();

    match (state.phase, inside) {
        (DwellPhase::Idle, true) => Step {
            next: DwellState {
                phase: DwellPhase::Pending { entry_time: now },
                last_known_location: location,
            },
            event: DwellEvent::Entered,
        },
        (DwellPhase::Idle, false) => Step {
            next: *state,
            event: DwellEvent::Idle,
        },
        (DwellPhase::Pending { entry_time }, true) if now - entry_time >= threshold => Step {
            next: DwellState {
                phase: DwellPhase::Active {
                    start_time: entry_time,
                },
                last_known_location: location,
            },
            event: DwellEvent::Confirmed,
        },
        (DwellPhase::Pending { entry_time }, true) => Step {
            next: DwellState {
                phase: DwellPhase::Pending { entry_time },
                last_known_location: location,
            },
            event: DwellEvent::Dwelling,
        },
        (DwellPhase::Pending { .. }, false) => Step {
            next: DwellState::default(),
            event: DwellEvent::Abandoned,
        },
        (DwellPhase::Active { start_time }, false) if now <= start_time => Step {
            next: *state,
            event: DwellEvent::StaleExit,
        },
        (DwellPhase::Active { start_time }, false) => Step {
            next: DwellState::default(),
            event: DwellEvent::Ended {
                start_time,
                end_time: now,
            },
        },
        (DwellPhase::Active { start_time }, true) => Step {
            next: DwellState {
                phase: DwellPhase::Active { start_time },
                last_known_location: location,
            },
            event: DwellEvent::Continued,
        },
    }
}
