//! Core data models for the shift tracker.
//!
//! This module contains all the domain models used throughout the engine.

mod dwell_state;
mod location;
mod settings;
mod shift;
mod summary;

pub use dwell_state::{DwellPhase, DwellState};
pub use location::{
    BoundaryEvent, Coordinates, LocationSample, LocationStatus, WorkplaceLocation,
    ZoneClassification,
};
pub use settings::{
    FAST_CONFIRM_SECONDS, MAX_HOURLY_RATE, RoundingMode, STANDARD_CONFIRM_SECONDS, Settings,
    SettingsUpdate,
};
pub use shift::{Shift, ShiftEntry};
pub use summary::{DailyBreakdown, WeeklySummary};
