use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::use_cases::get_today_status::handler::GetTodayStatusHandler;
use crate::modules::attendance::use_cases::record_attendance::handler::RecordAttendanceHandler;
use crate::modules::attendance_flow::core::geofence::GeofenceConfig;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type AttendanceEventStore = InMemoryEventStore<AttendanceEvent>;

#[derive(Clone)]
pub struct AppState {
    pub record_handler: Arc<RecordAttendanceHandler<AttendanceEventStore>>,
    pub status_handler: Arc<GetTodayStatusHandler<AttendanceEventStore>>,
    pub geofence: GeofenceConfig,
}

impl AppState {
    pub fn in_memory(event_store: Arc<AttendanceEventStore>, geofence: GeofenceConfig) -> Self {
        Self {
            record_handler: Arc::new(RecordAttendanceHandler::new(event_store.clone())),
            status_handler: Arc::new(GetTodayStatusHandler::new(event_store)),
            geofence,
        }
    }
}
