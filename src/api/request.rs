//! Request types for the shift tracker API.
//!
//! This module defines the JSON bodies and query strings the endpoints
//! accept. Timestamps are local wall-clock times; where a timestamp is
//! optional the server's current local time is used.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{BoundaryEvent, LocationSample, ShiftEntry};

/// The server's current local wall-clock time.
pub(crate) fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Body of `POST /samples`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// When the position was observed; defaults to now.
    #[serde(default)]
    pub observed_at: Option<NaiveDateTime>,
}

impl From<SampleRequest> for LocationSample {
    fn from(req: SampleRequest) -> Self {
        LocationSample {
            latitude: req.latitude,
            longitude: req.longitude,
            observed_at: req.observed_at.unwrap_or_else(local_now),
        }
    }
}

/// Body of `POST /geofence-events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryEventRequest {
    /// Which way the boundary was crossed.
    pub event: BoundaryEvent,
    /// When the crossing fired; defaults to now.
    #[serde(default)]
    pub observed_at: Option<NaiveDateTime>,
}

/// Body of `POST /shifts`, `PUT /shifts/:id` and `POST /shifts/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Raw start time.
    pub start_time: NaiveDateTime,
    /// Raw end time.
    pub end_time: NaiveDateTime,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<ShiftRequest> for ShiftEntry {
    fn from(req: ShiftRequest) -> Self {
        ShiftEntry {
            start_time: req.start_time,
            end_time: req.end_time,
            notes: req.notes,
        }
    }
}

/// Optional body of `POST /pending/:id/confirm`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmRequest {
    /// Notes to attach before saving.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Query of `GET /status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    /// Evaluate timers at this time instead of now.
    #[serde(default)]
    pub at: Option<NaiveDateTime>,
}

/// Query of `GET /summary/week`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekQuery {
    /// Any day in the wanted week; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
