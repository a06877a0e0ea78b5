// Attendance service port served in-process by the attendance handlers.

use crate::modules::attendance::core::stream::{current_work_date, work_date_of};
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::use_cases::get_today_status::handler::GetTodayStatusHandler;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::modules::attendance::use_cases::record_attendance::handler::{
    ApplicationError, RecordAttendanceHandler,
};
use crate::modules::attendance_flow::ports::attendance_service::{
    AttendanceService, AttendanceServiceError, PunchSubmission,
};
use crate::shared::core::attendance_day::{AttendanceAction, AttendanceDayState};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct LocalAttendanceService<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    record_handler: RecordAttendanceHandler<TEventStore>,
    status_handler: GetTodayStatusHandler<TEventStore>,
    employee_id: String,
}

impl<TEventStore> LocalAttendanceService<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, employee_id: impl Into<String>) -> Self {
        Self {
            record_handler: RecordAttendanceHandler::new(event_store.clone()),
            status_handler: GetTodayStatusHandler::new(event_store),
            employee_id: employee_id.into(),
        }
    }

    async fn record(
        &self,
        action: AttendanceAction,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        let now = Utc::now();
        let command = RecordAttendance {
            attendance_id: Uuid::now_v7().to_string(),
            employee_id: self.employee_id.clone(),
            work_date: work_date_of(now),
            action,
            occurred_at: now.timestamp_millis(),
            latitude: submission.latitude,
            longitude: submission.longitude,
            location_label: submission.location_label.clone(),
            reason: submission.reason.clone(),
            outside_geofence: submission.outside_geofence,
        };

        self.record_handler
            .handle(command)
            .await
            .map_err(|e| match e {
                ApplicationError::Domain(reason) => {
                    AttendanceServiceError::Rejected(reason.to_string())
                }
                ApplicationError::EventStore(e @ EventStoreError::VersionMismatch { .. }) => {
                    AttendanceServiceError::Rejected(e.to_string())
                }
                ApplicationError::EventStore(e) => {
                    AttendanceServiceError::Unavailable(e.to_string())
                }
            })
    }
}

#[async_trait]
impl<TEventStore> AttendanceService for LocalAttendanceService<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    async fn record_check_in(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.record(AttendanceAction::CheckIn, submission).await
    }

    async fn record_check_out(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.record(AttendanceAction::CheckOut, submission).await
    }

    async fn get_today_status(&self) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.status_handler
            .handle(&self.employee_id, current_work_date())
            .await
            .map_err(|e| AttendanceServiceError::Unavailable(e.to_string()))
    }
}
