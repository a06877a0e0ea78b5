use crate::modules::attendance_flow::core::geofence::GeofenceVerdict;
use crate::modules::attendance_flow::ports::attendance_service::AttendanceServiceError;
use crate::modules::attendance_flow::ports::location::LocationError;
use crate::shared::core::attendance_day::{AttendanceAction, AttendanceDayState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct SettledPunch {
    pub action: AttendanceAction,
    /// Day state as confirmed by the service.
    pub day: AttendanceDayState,
    /// None when geofencing is disabled.
    pub verdict: Option<GeofenceVerdict>,
    pub location_label: String,
    pub reason: Option<String>,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Settled(SettledPunch),
    /// The employee backed out of the justification prompt. Nothing was sent.
    Cancelled { action: AttendanceAction },
    /// Both punches for today are already recorded. Nothing was sent.
    DayAlreadyComplete,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("an attendance punch is already in progress")]
    AlreadyInFlight,

    #[error("could not read today's attendance: {0}")]
    StatusUnavailable(#[source] AttendanceServiceError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("attendance was not recorded: {0}")]
    SubmissionFailed(#[source] AttendanceServiceError),
}
