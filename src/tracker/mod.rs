//! Geofence-driven shift detection.
//!
//! The pure transition rules live in [`machine`]; [`ShiftTracker`] wires
//! them to storage and notification under a single lock.

pub mod machine;
mod service;

pub use machine::{DwellEvent, Observation, Step, advance};
pub use service::{SampleOutcome, ShiftTracker, TrackerStatus};
