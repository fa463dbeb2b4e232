//! Location models.
//!
//! This module defines coordinates, the configured workplace, incoming
//! location samples and the zone classification derived from them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The single configured work site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkplaceLocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Free-form address shown to the user.
    #[serde(default)]
    pub address: String,
}

impl WorkplaceLocation {
    /// Returns the workplace position as plain coordinates.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A single timestamped position reported by the sample source.
///
/// Samples are transient: they drive the tracker and are never persisted
/// individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// When the position was observed.
    pub observed_at: NaiveDateTime,
}

impl LocationSample {
    /// Returns the sample position as plain coordinates.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Distance tier of a position relative to the workplace.
///
/// # Example
///
/// ```
/// use shift_tracker::models::ZoneClassification;
///
/// assert!(ZoneClassification::Inside.is_inside());
/// assert!(!ZoneClassification::Near.is_inside());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneClassification {
    /// Within 200 m of the workplace.
    Inside,
    /// More than 200 m and at most 500 m away.
    Near,
    /// More than 500 m away.
    Outside,
}

impl ZoneClassification {
    /// Only `Inside` counts as being at work.
    pub fn is_inside(self) -> bool {
        matches!(self, ZoneClassification::Inside)
    }
}

impl std::fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneClassification::Inside => write!(f, "inside"),
            ZoneClassification::Near => write!(f, "near"),
            ZoneClassification::Outside => write!(f, "outside"),
        }
    }
}

/// Classification of a sample together with its measured distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationStatus {
    /// The zone the sample falls in.
    pub zone: ZoneClassification,
    /// Great-circle distance to the workplace in meters.
    pub distance_meters: f64,
    /// When the underlying sample was observed.
    pub observed_at: NaiveDateTime,
}

/// A discrete geofence crossing reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryEvent {
    /// The device crossed into the workplace region.
    Enter,
    /// The device crossed out of the workplace region.
    Exit,
}

impl BoundaryEvent {
    /// The zone a crossing asserts at the moment it fires.
    pub fn zone(self) -> ZoneClassification {
        match self {
            BoundaryEvent::Enter => ZoneClassification::Inside,
            BoundaryEvent::Exit => ZoneClassification::Outside,
        }
    }
}
