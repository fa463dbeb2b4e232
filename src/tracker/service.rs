//! The shift tracker service.
//!
//! [`ShiftTracker`] runs each sample through one atomic handling step:
//! read settings and dwell state, apply [`advance`], persist the next state
//! and, when a shift ends, hand the finalized record to the notifier. A
//! mutex serialises the steps so a polling tick and a boundary event racing
//! each other cannot lose an update.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::machine::{DwellEvent, Observation, advance};
use crate::calculation::{calculate_shift, locate};
use crate::error::EngineResult;
use crate::models::{
    BoundaryEvent, DwellPhase, DwellState, LocationSample, Settings, Shift, ZoneClassification,
};
use crate::notify::Notifier;
use crate::storage::ShiftRepository;

/// What handling one sample or boundary event produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleOutcome {
    /// The zone the input asserted.
    pub zone: ZoneClassification,
    /// Distance to the workplace; absent for boundary events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    /// The transition taken.
    pub event: DwellEvent,
    /// The dwell state after the step.
    pub state: DwellState,
    /// The finalized shift, when this step ended one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalized: Option<Shift>,
}

/// Snapshot of the tracker for status displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerStatus {
    /// Current dwell state.
    pub state: DwellState,
    /// Whether the thirty-second threshold is in effect.
    pub fast_confirm_mode: bool,
    /// The confirmation threshold in seconds.
    pub confirm_threshold_seconds: i64,
    /// Seconds since entry (pending) or since start (active).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<i64>,
    /// Seconds left before a pending dwell is confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_confirm_seconds: Option<i64>,
    /// Pay earned so far by the active shift, on the rounded grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_pay: Option<Decimal>,
}

/// Geofence-driven shift detector.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shift_tracker::models::{LocationSample, Settings};
/// use shift_tracker::notify::PendingShiftInbox;
/// use shift_tracker::storage::InMemoryRepository;
/// use shift_tracker::tracker::{DwellEvent, ShiftTracker};
/// use chrono::NaiveDateTime;
///
/// let settings = Settings::default();
/// let tracker = ShiftTracker::new(
///     Arc::new(InMemoryRepository::new(settings.clone())),
///     Arc::new(PendingShiftInbox::new()),
/// );
///
/// let sample = LocationSample {
///     latitude: settings.workplace.latitude,
///     longitude: settings.workplace.longitude,
///     observed_at: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let outcome = tracker.handle_sample(&sample).unwrap();
/// assert_eq!(outcome.event, DwellEvent::Entered);
/// ```
pub struct ShiftTracker {
    repository: Arc<dyn ShiftRepository>,
    notifier: Arc<dyn Notifier>,
    step_lock: Mutex<()>,
}

impl ShiftTracker {
    /// Creates a tracker over a repository and a notifier.
    pub fn new(repository: Arc<dyn ShiftRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
            step_lock: Mutex::new(()),
        }
    }

    /// The repository the tracker reads and writes.
    pub fn repository(&self) -> &Arc<dyn ShiftRepository> {
        &self.repository
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.step_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Classifies a polled location sample and applies it.
    ///
    /// # Errors
    ///
    /// Repository failures propagate unchanged; nothing is retried.
    pub fn handle_sample(&self, sample: &LocationSample) -> EngineResult<SampleOutcome> {
        let _guard = self.lock();
        let settings = self.repository.get_settings()?;
        let status = locate(sample, &settings.workplace);

        let observation = Observation {
            zone: status.zone,
            observed_at: sample.observed_at,
            location: Some(sample.coordinates()),
        };

        let mut outcome = self.apply(&settings, &observation)?;
        outcome.distance_meters = Some(status.distance_meters);
        Ok(outcome)
    }

    /// Applies a platform geofence crossing.
    ///
    /// Enter is treated exactly like an inside sample and exit exactly like
    /// an outside sample.
    pub fn handle_boundary_event(
        &self,
        event: BoundaryEvent,
        observed_at: NaiveDateTime,
    ) -> EngineResult<SampleOutcome> {
        let _guard = self.lock();
        let settings = self.repository.get_settings()?;

        let observation = Observation {
            zone: event.zone(),
            observed_at,
            location: None,
        };

        self.apply(&settings, &observation)
    }

    /// Reports the dwell phase, timers and running pay at `now`.
    pub fn status(&self, now: NaiveDateTime) -> EngineResult<TrackerStatus> {
        let settings = self.repository.get_settings()?;
        let state = self.repository.get_dwell_state()?;
        let threshold = settings.confirm_threshold();

        let (elapsed_seconds, remaining_confirm_seconds, estimated_pay) = match state.phase {
            DwellPhase::Idle => (None, None, None),
            DwellPhase::Pending { entry_time } => {
                let elapsed = (now - entry_time).max(Duration::zero());
                let remaining = (threshold - elapsed).num_seconds().max(0);
                (Some(elapsed.num_seconds()), Some(remaining), None)
            }
            DwellPhase::Active { start_time } => {
                let pay = calculate_shift(
                    start_time,
                    now,
                    settings.rounding_mode,
                    settings.hourly_rate,
                )
                .map(|calculation| calculation.pay)
                .unwrap_or(Decimal::ZERO);
                (Some((now - start_time).num_seconds().max(0)), None, Some(pay))
            }
        };

        Ok(TrackerStatus {
            state,
            fast_confirm_mode: settings.fast_confirm_mode,
            confirm_threshold_seconds: threshold.num_seconds(),
            elapsed_seconds,
            remaining_confirm_seconds,
            estimated_pay,
        })
    }

    fn apply(&self, settings: &Settings, observation: &Observation) -> EngineResult<SampleOutcome> {
        let state = self.repository.get_dwell_state()?;
        let step = advance(&state, observation, settings.confirm_threshold());

        let finalized = match step.event {
            DwellEvent::Ended {
                start_time,
                end_time,
            } => Some(self.finalize(settings, start_time, end_time)?),
            _ => {
                if step.next != state {
                    self.repository.save_dwell_state(&step.next)?;
                }
                self.log_transition(&step.event, observation);
                None
            }
        };

        Ok(SampleOutcome {
            zone: observation.zone,
            distance_meters: None,
            event: step.event,
            state: step.next,
            finalized,
        })
    }

    /// Computes the shift, resets the dwell state, then notifies.
    ///
    /// The reset is committed before the notifier runs, so a failed
    /// delivery never brings the shift back.
    fn finalize(
        &self,
        settings: &Settings,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> EngineResult<Shift> {
        let calculation = calculate_shift(
            start_time,
            end_time,
            settings.rounding_mode,
            settings.hourly_rate,
        )?;
        let shift = Shift::from_calculation(Shift::new_id(), &calculation, None, false);

        self.repository.clear_dwell_state()?;

        info!(
            shift_id = %shift.id,
            start_time = %shift.start_time,
            end_time = %shift.end_time,
            duration_minutes = shift.duration_minutes,
            pay = %shift.pay,
            "Shift ended"
        );

        if let Err(err) = self.notifier.notify_shift_ended(&shift) {
            warn!(shift_id = %shift.id, error = %err, "Shift-ended notification failed");
        }

        Ok(shift)
    }

    fn log_transition(&self, event: &DwellEvent, observation: &Observation) {
        let at = observation.observed_at;
        let zone = observation.zone;
        match event {
            DwellEvent::Entered => info!(%at, %zone, "Entered workplace, dwell started"),
            DwellEvent::Confirmed => info!(%at, "Dwell confirmed, shift active"),
            DwellEvent::Abandoned => info!(%at, %zone, "Left before confirmation, dwell abandoned"),
            DwellEvent::StaleExit => warn!(%at, "Exit observed before shift start, ignored"),
            DwellEvent::Idle | DwellEvent::Dwelling | DwellEvent::Continued => {
                debug!(%at, %zone, ?event, "No transition")
            }
            DwellEvent::Ended { .. } => {}
        }
    }
}
