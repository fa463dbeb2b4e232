//! Calculation logic for the shift tracker.
//!
//! This module contains the pure functions the tracker is built on:
//! great-circle distance and zone classification, flooring timestamps to
//! the rounding grid, duration and pay arithmetic, and weekly totals.

mod geo;
mod pay;
mod rounding;
mod weekly;

pub use geo::{
    EARTH_RADIUS_METERS, INSIDE_RADIUS_METERS, NEAR_RADIUS_METERS, classify, classify_distance,
    distance_meters, locate,
};
pub use pay::{ShiftCalculation, calculate_shift, compute_pay, preview_shift};
pub use rounding::{duration_minutes, floor_to_grid};
pub use weekly::{summarize_week, week_bounds};
