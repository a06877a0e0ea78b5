use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::attendance::core::stream::work_date_of;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::modules::attendance::use_cases::record_attendance::handler::ApplicationError;
use crate::shared::core::attendance_day::AttendanceAction;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordAttendanceBody {
    pub employee_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_label: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub outside_geofence: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub async fn check_in(
    State(state): State<AppState>,
    body: Result<Json<RecordAttendanceBody>, JsonRejection>,
) -> impl IntoResponse {
    record(state, AttendanceAction::CheckIn, body).await
}

pub async fn check_out(
    State(state): State<AppState>,
    body: Result<Json<RecordAttendanceBody>, JsonRejection>,
) -> impl IntoResponse {
    record(state, AttendanceAction::CheckOut, body).await
}

async fn record(
    state: AppState,
    action: AttendanceAction,
    body: Result<Json<RecordAttendanceBody>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let now = Utc::now();
    let command = RecordAttendance {
        attendance_id: Uuid::now_v7().to_string(),
        employee_id: body.employee_id,
        work_date: work_date_of(now),
        action,
        occurred_at: now.timestamp_millis(),
        latitude: body.latitude,
        longitude: body.longitude,
        location_label: body.location_label,
        reason: body.reason,
        outside_geofence: body.outside_geofence,
    };

    match state.record_handler.handle(command).await {
        Ok(day) => (StatusCode::OK, Json(day)).into_response(),
        Err(ApplicationError::Domain(reason)) => conflict(reason.to_string()),
        // Lost the race against another punch for the same day.
        Err(ApplicationError::EventStore(EventStoreError::VersionMismatch { .. })) => {
            conflict("attendance changed concurrently, reload today's status".into())
        }
        Err(e) => {
            tracing::error!(error = %e, %action, "failed to record attendance");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn conflict(error: String) -> axum::response::Response {
    (StatusCode::CONFLICT, Json(ErrorBody { error })).into_response()
}
