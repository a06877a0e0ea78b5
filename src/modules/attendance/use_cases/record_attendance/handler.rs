use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::state::AttendanceDayRecord;
use crate::modules::attendance::core::stream::attendance_day_stream_id;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::modules::attendance::use_cases::record_attendance::decide::decide_record;
use crate::modules::attendance::use_cases::record_attendance::decision::{DecideError, Decision};
use crate::shared::core::attendance_day::AttendanceDayState;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

pub struct RecordAttendanceHandler<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> RecordAttendanceHandler<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(
        &self,
        command: RecordAttendance,
    ) -> Result<AttendanceDayState, ApplicationError> {
        let stream_id = attendance_day_stream_id(&command.employee_id, command.work_date);
        let stream = self.event_store.load(&stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(AttendanceDayRecord::None, evolve);

        let action = command.action;
        match decide_record(&state, command) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(&stream_id, stream.version, &events)
                    .await?;
                let next = events.into_iter().fold(state, evolve);
                tracing::info!(%stream_id, %action, "attendance recorded");
                Ok(next.to_day_state())
            }
            Decision::Rejected { reason } => {
                tracing::info!(%stream_id, %action, %reason, "attendance rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
