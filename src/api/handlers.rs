//! HTTP request handlers for the shift tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use std::fmt::Display;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{preview_shift, summarize_week};
use crate::error::EngineResult;
use crate::export::{export_csv, export_file_name};
use crate::models::{LocationSample, Settings, SettingsUpdate, Shift, ShiftEntry};

use super::request::{
    BoundaryEventRequest, ConfirmRequest, SampleRequest, ShiftRequest, StatusQuery, WeekQuery,
    local_now,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/samples", post(sample_handler))
        .route("/geofence-events", post(boundary_event_handler))
        .route("/status", get(status_handler))
        .route(
            "/settings",
            get(get_settings_handler).patch(update_settings_handler),
        )
        .route("/shifts", get(list_shifts_handler).post(create_shift_handler))
        .route("/shifts/preview", post(preview_shift_handler))
        .route(
            "/shifts/:id",
            put(update_shift_handler).delete(delete_shift_handler),
        )
        .route("/pending", get(list_pending_handler))
        .route("/pending/:id", delete(discard_pending_handler))
        .route("/pending/:id/confirm", post(confirm_pending_handler))
        .route("/summary/week", get(weekly_summary_handler))
        .route("/export.csv", get(export_csv_handler))
        .with_state(state)
}

/// Logs a failed request and converts the error into its HTTP form.
fn failure<E>(correlation_id: Uuid, err: E) -> ApiErrorResponse
where
    E: Into<ApiErrorResponse> + Display,
{
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for POST /samples.
///
/// Classifies a polled location against the workplace and advances the
/// dwell state machine.
async fn sample_handler(
    State(state): State<AppState>,
    payload: Result<Json<SampleRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|err| failure(correlation_id, err))?;
    let sample: LocationSample = request.into();

    let outcome = state
        .tracker()
        .handle_sample(&sample)
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        zone = %outcome.zone,
        observed_at = %sample.observed_at,
        "Location sample processed"
    );
    Ok(Json(outcome))
}

/// Handler for POST /geofence-events.
async fn boundary_event_handler(
    State(state): State<AppState>,
    payload: Result<Json<BoundaryEventRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|err| failure(correlation_id, err))?;
    let observed_at = request.observed_at.unwrap_or_else(local_now);

    let outcome = state
        .tracker()
        .handle_boundary_event(request.event, observed_at)
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        event = ?request.event,
        %observed_at,
        "Boundary event processed"
    );
    Ok(Json(outcome))
}

/// Handler for GET /status.
async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let now = query.at.unwrap_or_else(local_now);
    let status = state
        .tracker()
        .status(now)
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(status))
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> HandlerResult<Json<Settings>> {
    let correlation_id = Uuid::new_v4();
    let settings = state
        .repository()
        .get_settings()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(settings))
}

/// Handler for PATCH /settings.
///
/// Merges the supplied fields over the stored settings.
async fn update_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> HandlerResult<Json<Settings>> {
    let correlation_id = Uuid::new_v4();
    let Json(update) = payload.map_err(|err| failure(correlation_id, err))?;

    let repository = state.repository();
    let settings = repository
        .get_settings()
        .and_then(|current| current.merged(update))
        .map_err(|err| failure(correlation_id, err))?;
    repository
        .save_settings(&settings)
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        hourly_rate = %settings.hourly_rate,
        rounding_mode = ?settings.rounding_mode,
        fast_confirm_mode = settings.fast_confirm_mode,
        "Settings updated"
    );
    Ok(Json(settings))
}

/// Handler for GET /shifts. Newest shift first.
async fn list_shifts_handler(State(state): State<AppState>) -> HandlerResult<Json<Vec<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let mut shifts = state
        .repository()
        .get_shifts()
        .map_err(|err| failure(correlation_id, err))?;
    shifts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    Ok(Json(shifts))
}

/// Builds a manual shift from an entry, priced at the current settings.
fn manual_shift(state: &AppState, id: String, entry: &ShiftEntry) -> EngineResult<Shift> {
    let settings = state.repository().get_settings()?;
    let calculation = preview_shift(entry, &settings)?;
    Ok(Shift::from_calculation(
        id,
        &calculation,
        entry.cleaned_notes(),
        true,
    ))
}

/// Handler for POST /shifts.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|err| failure(correlation_id, err))?;
    let entry: ShiftEntry = request.into();

    let shift = manual_shift(&state, Shift::new_id(), &entry)
        .and_then(|shift| state.repository().save_shift(&shift).map(|()| shift))
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = %shift.id,
        duration_minutes = shift.duration_minutes,
        pay = %shift.pay,
        "Manual shift created"
    );
    Ok((StatusCode::CREATED, Json(shift)))
}

/// Handler for POST /shifts/preview. Nothing is stored.
async fn preview_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|err| failure(correlation_id, err))?;
    let entry: ShiftEntry = request.into();

    let calculation = state
        .repository()
        .get_settings()
        .and_then(|settings| preview_shift(&entry, &settings))
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(calculation))
}

/// Handler for PUT /shifts/:id.
///
/// Recomputes the stored shift from the new times; the result is always
/// marked manual.
async fn update_shift_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> HandlerResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|err| failure(correlation_id, err))?;
    let entry: ShiftEntry = request.into();

    let repository = state.repository();
    let shift = repository
        .get_shift(&id)
        .and_then(|existing| manual_shift(&state, existing.id, &entry))
        .and_then(|shift| repository.save_shift(&shift).map(|()| shift))
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = %shift.id,
        pay = %shift.pay,
        "Shift updated"
    );
    Ok(Json(shift))
}

/// Handler for DELETE /shifts/:id.
async fn delete_shift_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    state
        .repository()
        .delete_shift(&id)
        .map_err(|err| failure(correlation_id, err))?;
    info!(correlation_id = %correlation_id, shift_id = %id, "Shift deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /pending.
async fn list_pending_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.inbox().list())
}

/// Handler for POST /pending/:id/confirm.
///
/// The body is optional; when present it may carry notes.
async fn confirm_pending_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> HandlerResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let request: ConfirmRequest = if body.is_empty() {
        ConfirmRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "JSON data error");
            ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_json(err.to_string()),
            }
        })?
    };

    let shift = state
        .inbox()
        .confirm(&id, request.notes, state.repository())
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(shift))
}

/// Handler for DELETE /pending/:id.
async fn discard_pending_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    state
        .inbox()
        .discard(&id)
        .map_err(|err| failure(correlation_id, err))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /summary/week.
async fn weekly_summary_handler(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let date = query.date.unwrap_or_else(|| local_now().date());
    let shifts = state
        .repository()
        .get_shifts()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(summarize_week(&shifts, date)))
}

/// Handler for GET /export.csv.
async fn export_csv_handler(State(state): State<AppState>) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let shifts = state
        .repository()
        .get_shifts()
        .map_err(|err| failure(correlation_id, err))?;
    let body = export_csv(&shifts).map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, shifts_count = shifts.len(), "Shifts exported");
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(local_now().date())
    );
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        let repository = Arc::new(InMemoryRepository::new(Settings::default()));
        create_router(AppState::new(repository))
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Bytes) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes)
    }

    fn sample_body(latitude: f64, longitude: f64, at: &str) -> String {
        format!(r#"{{"latitude": {latitude}, "longitude": {longitude}, "observed_at": "{at}"}}"#)
    }

    const WORK_LAT: f64 = 37.7749;
    const WORK_LON: f64 = -122.4194;

    #[tokio::test]
    async fn test_inside_sample_starts_dwell() {
        let router = create_test_router();
        let body = sample_body(WORK_LAT, WORK_LON, "2026-01-15T09:00:00");

        let (status, bytes) = send(&router, "POST", "/samples", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);

        let outcome: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(outcome["zone"], "inside");
        assert_eq!(outcome["event"]["kind"], "entered");
        assert_eq!(outcome["state"]["phase"], "pending");
        assert_eq!(outcome["state"]["entry_time"], "2026-01-15T09:00:00");
    }

    #[tokio::test]
    async fn test_malformed_sample_returns_400() {
        let router = create_test_router();
        let (status, bytes) = send(&router, "POST", "/samples", Some("{invalid json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_test_router();
        let (status, bytes) = send(&router, "POST", "/samples", Some(r#"{"latitude": 1.0}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("longitude"));
    }

    #[tokio::test]
    async fn test_full_shift_lands_in_pending_then_confirms() {
        let router = create_test_router();
        for at in ["2026-01-15T09:00:00", "2026-01-15T10:01:00"] {
            let body = sample_body(WORK_LAT, WORK_LON, at);
            let (status, _) = send(&router, "POST", "/samples", Some(&body)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let exit = r#"{"event": "exit", "observed_at": "2026-01-15T12:00:00"}"#;
        let (status, bytes) = send(&router, "POST", "/geofence-events", Some(exit)).await;
        assert_eq!(status, StatusCode::OK);
        let outcome: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(outcome["event"]["kind"], "ended");
        assert_eq!(outcome["finalized"]["duration_minutes"], 180);
        let shift_id = outcome["finalized"]["id"].as_str().unwrap().to_string();

        let (_, bytes) = send(&router, "GET", "/pending", None).await;
        let pending: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(pending.as_array().unwrap().len(), 1);
        assert_eq!(pending[0]["title"], "Shift Ended");

        let uri = format!("/pending/{shift_id}/confirm");
        let (status, bytes) = send(&router, "POST", &uri, Some(r#"{"notes": "  opened store "}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let shift: Shift = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(shift.notes.as_deref(), Some("opened store"));
        assert_eq!(shift.pay, Decimal::new(4500, 2));

        let (_, bytes) = send(&router, "GET", "/shifts", None).await;
        let shifts: Vec<Shift> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(shifts.len(), 1);
        assert!(!shifts[0].is_manual);
    }

    #[tokio::test]
    async fn test_confirm_without_body() {
        let router = create_test_router();
        let enter = r#"{"event": "enter", "observed_at": "2026-01-15T09:00:00"}"#;
        send(&router, "POST", "/geofence-events", Some(enter)).await;
        let body = sample_body(WORK_LAT, WORK_LON, "2026-01-15T10:00:00");
        send(&router, "POST", "/samples", Some(&body)).await;
        let exit = r#"{"event": "exit", "observed_at": "2026-01-15T11:00:00"}"#;
        let (_, bytes) = send(&router, "POST", "/geofence-events", Some(exit)).await;
        let outcome: Value = serde_json::from_slice(&bytes).unwrap();
        let shift_id = outcome["finalized"]["id"].as_str().unwrap().to_string();

        let uri = format!("/pending/{shift_id}/confirm");
        let (status, bytes) = send(&router, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let shift: Shift = serde_json::from_slice(&bytes).unwrap();
        assert!(shift.notes.is_none());
    }

    #[tokio::test]
    async fn test_confirm_unknown_pending_returns_404() {
        let router = create_test_router();
        let (status, bytes) = send(&router, "POST", "/pending/missing/confirm", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "SHIFT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_manual_shift_end_before_start_returns_400() {
        let router = create_test_router();
        let body = r#"{"start_time": "2026-01-15T17:00:00", "end_time": "2026-01-15T09:00:00"}"#;
        let (status, bytes) = send(&router, "POST", "/shifts", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_shifts_listed_newest_first() {
        let router = create_test_router();
        let older = r#"{"start_time": "2026-01-13T09:00:00", "end_time": "2026-01-13T17:00:00"}"#;
        let newer = r#"{"start_time": "2026-01-14T09:00:00", "end_time": "2026-01-14T17:00:00", "notes": "  "}"#;

        let (status, _) = send(&router, "POST", "/shifts", Some(older)).await;
        assert_eq!(status, StatusCode::CREATED);
        send(&router, "POST", "/shifts", Some(newer)).await;

        let (_, bytes) = send(&router, "GET", "/shifts", None).await;
        let shifts: Vec<Shift> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].start_time.to_string(), "2026-01-14 09:00:00");
        assert!(shifts.iter().all(|shift| shift.is_manual));
        assert!(shifts[0].notes.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_shift_returns_404() {
        let router = create_test_router();
        let body = r#"{"start_time": "2026-01-15T09:00:00", "end_time": "2026-01-15T17:00:00"}"#;
        let (status, _) = send(&router, "PUT", "/shifts/nope", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_then_delete_shift() {
        let router = create_test_router();
        let body = r#"{"start_time": "2026-01-15T09:00:00", "end_time": "2026-01-15T17:00:00"}"#;
        let (_, bytes) = send(&router, "POST", "/shifts", Some(body)).await;
        let created: Shift = serde_json::from_slice(&bytes).unwrap();

        let edit = r#"{"start_time": "2026-01-15T09:00:00", "end_time": "2026-01-15T10:00:00"}"#;
        let uri = format!("/shifts/{}", created.id);
        let (status, bytes) = send(&router, "PUT", &uri, Some(edit)).await;
        assert_eq!(status, StatusCode::OK);
        let updated: Shift = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.duration_minutes, 60);
        assert_eq!(updated.pay, Decimal::new(1500, 2));

        let (status, _) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, bytes) = send(&router, "GET", "/shifts", None).await;
        let shifts: Vec<Shift> = serde_json::from_slice(&bytes).unwrap();
        assert!(shifts.is_empty());
    }

    #[tokio::test]
    async fn test_preview_does_not_store() {
        let router = create_test_router();
        let body = r#"{"start_time": "2026-01-15T09:10:00", "end_time": "2026-01-15T10:40:00"}"#;
        let (status, bytes) = send(&router, "POST", "/shifts/preview", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let preview: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(preview["rounded_start_time"], "2026-01-15T09:00:00");
        assert_eq!(preview["rounded_end_time"], "2026-01-15T10:00:00");
        assert_eq!(preview["duration_minutes"], 60);

        let (_, bytes) = send(&router, "GET", "/shifts", None).await;
        let shifts: Vec<Shift> = serde_json::from_slice(&bytes).unwrap();
        assert!(shifts.is_empty());
    }

    #[tokio::test]
    async fn test_patch_settings_merges_fields() {
        let router = create_test_router();
        let patch = r#"{"hourly_rate": "20.00", "rounding_mode": "half_hour"}"#;
        let (status, _) = send(&router, "PATCH", "/settings", Some(patch)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, bytes) = send(&router, "GET", "/settings", None).await;
        let settings: Settings = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(settings.hourly_rate, Decimal::new(2000, 2));
        assert_eq!(settings.workplace.address, "Default Workplace");
        assert!(settings.notifications_enabled);
    }

    #[tokio::test]
    async fn test_patch_settings_rejects_non_positive_rate() {
        let router = create_test_router();
        let (status, bytes) =
            send(&router, "PATCH", "/settings", Some(r#"{"hourly_rate": "-1"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");

        let (_, bytes) = send(&router, "GET", "/settings", None).await;
        let settings: Settings = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(settings.hourly_rate, Decimal::new(1500, 2));
    }

    #[tokio::test]
    async fn test_patch_settings_rejects_overflowing_rate() {
        let router = create_test_router();
        let patch = r#"{"hourly_rate": "79228162514264337593543950335"}"#;
        let (status, bytes) = send(&router, "PATCH", "/settings", Some(patch)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");

        // A shift can still end normally afterwards
        let enter = r#"{"event": "enter", "observed_at": "2026-01-15T09:00:00"}"#;
        let confirm = r#"{"event": "enter", "observed_at": "2026-01-15T10:00:00"}"#;
        let exit = r#"{"event": "exit", "observed_at": "2026-01-15T12:00:00"}"#;
        send(&router, "POST", "/geofence-events", Some(enter)).await;
        send(&router, "POST", "/geofence-events", Some(confirm)).await;
        let (status, bytes) = send(&router, "POST", "/geofence-events", Some(exit)).await;
        assert_eq!(status, StatusCode::OK);
        let outcome: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(outcome["event"]["kind"], "ended");
    }

    #[tokio::test]
    async fn test_status_reports_remaining_confirm_time() {
        let router = create_test_router();
        let body = sample_body(WORK_LAT, WORK_LON, "2026-01-15T09:00:00");
        send(&router, "POST", "/samples", Some(&body)).await;

        let (status, bytes) = send(&router, "GET", "/status?at=2026-01-15T09:15:00", None).await;
        assert_eq!(status, StatusCode::OK);
        let report: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report["elapsed_seconds"], 900);
        assert_eq!(report["remaining_confirm_seconds"], 2700);
        assert_eq!(report["confirm_threshold_seconds"], 3600);
    }

    #[tokio::test]
    async fn test_weekly_summary() {
        let router = create_test_router();
        let monday = r#"{"start_time": "2026-01-12T09:00:00", "end_time": "2026-01-12T11:00:00"}"#;
        let next_week = r#"{"start_time": "2026-01-19T09:00:00", "end_time": "2026-01-19T11:00:00"}"#;
        send(&router, "POST", "/shifts", Some(monday)).await;
        send(&router, "POST", "/shifts", Some(next_week)).await;

        let (status, bytes) = send(&router, "GET", "/summary/week?date=2026-01-15", None).await;
        assert_eq!(status, StatusCode::OK);
        let summary: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(summary["week_start"], "2026-01-12");
        assert_eq!(summary["total_shifts"], 1);
        assert_eq!(summary["total_minutes"], 120);
    }

    #[tokio::test]
    async fn test_export_csv() {
        let router = create_test_router();
        let body = r#"{"start_time": "2026-01-15T09:00:00", "end_time": "2026-01-15T10:00:00", "notes": "a,b"}"#;
        send(&router, "POST", "/shifts", Some(body)).await;

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/export.csv").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/csv");
        let disposition = response.headers().get("content-disposition").unwrap();
        assert!(disposition.to_str().unwrap().contains("shifts_export_"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.ends_with("2026-01-15,09:00,10:00,1.00,$15.00,a;b\n"));
    }
}
