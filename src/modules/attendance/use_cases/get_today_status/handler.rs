use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::state::AttendanceDayRecord;
use crate::modules::attendance::core::stream::attendance_day_stream_id;
use crate::shared::core::attendance_day::AttendanceDayState;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct GetTodayStatusHandler<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> GetTodayStatusHandler<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(
        &self,
        employee_id: &str,
        work_date: NaiveDate,
    ) -> Result<AttendanceDayState, EventStoreError> {
        let stream_id = attendance_day_stream_id(employee_id, work_date);
        let stream = self.event_store.load(&stream_id).await?;
        let record = stream
            .events
            .into_iter()
            .fold(AttendanceDayRecord::None, evolve);
        Ok(record.to_day_state())
    }
}
