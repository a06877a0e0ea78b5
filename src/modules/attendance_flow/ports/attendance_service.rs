// Attendance service port: records punches and reports today's state.
//
// The service is the source of truth and enforces one check-in and one
// check-out per day. Reads may lag behind writes for a short while.

use crate::shared::core::attendance_day::AttendanceDayState;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceServiceError {
    #[error("attendance service rejected the request: {0}")]
    Rejected(String),

    #[error("attendance service returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("attendance service unavailable: {0}")]
    Unavailable(String),

    #[error("invalid response from attendance service: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PunchSubmission {
    pub latitude: f64,
    pub longitude: f64,
    pub location_label: String,
    pub reason: Option<String>,
    /// Marks the record as a location exception.
    pub outside_geofence: bool,
}

#[async_trait]
pub trait AttendanceService: Send + Sync {
    async fn record_check_in(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError>;

    async fn record_check_out(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError>;

    async fn get_today_status(&self) -> Result<AttendanceDayState, AttendanceServiceError>;
}
