//! HTTP API module for the shift tracker.
//!
//! This module exposes the tracker over REST: location samples and
//! geofence events in, dwell status, shift history, the pending
//! confirmation inbox, weekly summaries and CSV export out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BoundaryEventRequest, ConfirmRequest, SampleRequest, ShiftRequest, StatusQuery, WeekQuery,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
