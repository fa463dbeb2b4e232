//! Great-circle distance and zone classification.
//!
//! Pure numeric functions: no validation, no side effects. Malformed
//! coordinates yield whatever the haversine formula yields.

use crate::models::{
    Coordinates, LocationSample, LocationStatus, WorkplaceLocation, ZoneClassification,
};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Samples at or within this distance are inside the workplace.
pub const INSIDE_RADIUS_METERS: f64 = 200.0;

/// Samples beyond the inside radius and at or within this distance are near.
pub const NEAR_RADIUS_METERS: f64 = 500.0;

/// Haversine distance between two points, in meters.
///
/// Symmetric, zero for identical points and monotonic in angular
/// separation.
///
/// # Example
///
/// ```
/// use shift_tracker::calculation::distance_meters;
/// use shift_tracker::models::Coordinates;
///
/// let a = Coordinates::new(0.0, 0.0);
/// let b = Coordinates::new(0.0, 1.0);
/// let d = distance_meters(a, b);
/// assert!((d - 111_194.93).abs() < 0.01);
/// assert_eq!(distance_meters(a, a), 0.0);
/// ```
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Maps a distance in meters onto a zone.
///
/// Both thresholds are inclusive on the lower tier: exactly 200 m is
/// inside and exactly 500 m is near.
pub fn classify_distance(distance: f64) -> ZoneClassification {
    if distance <= INSIDE_RADIUS_METERS {
        ZoneClassification::Inside
    } else if distance <= NEAR_RADIUS_METERS {
        ZoneClassification::Near
    } else {
        ZoneClassification::Outside
    }
}

/// Classifies a sample against the workplace.
pub fn classify(sample: &LocationSample, workplace: &WorkplaceLocation) -> ZoneClassification {
    locate(sample, workplace).zone
}

/// Classifies a sample and keeps the measured distance alongside.
pub fn locate(sample: &LocationSample, workplace: &WorkplaceLocation) -> LocationStatus {
    let distance = distance_meters(sample.coordinates(), workplace.coordinates());
    LocationStatus {
        zone: classify_distance(distance),
        distance_meters: distance,
        observed_at: sample.observed_at,
    }
}
