// Bounded re-reads of today's status after a punch settles.
//
// Reads can trail writes on the service side, so the client re-reads a fixed
// number of times at increasing offsets and then stops.

use crate::modules::attendance_flow::ports::attendance_service::AttendanceService;
use crate::modules::attendance_flow::use_cases::check_in_out::status_cache::AttendanceStatusCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSchedule {
    /// Offsets from the moment the punch settled, ascending.
    offsets: Vec<Duration>,
}

impl RefreshSchedule {
    pub fn new(mut offsets: Vec<Duration>) -> Self {
        offsets.sort();
        offsets.dedup();
        Self { offsets }
    }

    pub fn none() -> Self {
        Self {
            offsets: Vec::new(),
        }
    }

    pub fn offsets(&self) -> &[Duration] {
        &self.offsets
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        Self::new(vec![Duration::from_millis(500), Duration::from_millis(1_500)])
    }
}

pub fn spawn_status_refreshes<TAttendance>(
    service: Arc<TAttendance>,
    cache: Arc<AttendanceStatusCache>,
    schedule: RefreshSchedule,
) -> JoinHandle<()>
where
    TAttendance: AttendanceService + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut elapsed = Duration::ZERO;
        for offset in schedule.offsets {
            tokio::time::sleep(offset.saturating_sub(elapsed)).await;
            elapsed = offset;

            match service.get_today_status().await {
                Ok(day) => {
                    tracing::debug!(?offset, ?day, "attendance status refreshed");
                    cache.store(day).await;
                }
                Err(error) => {
                    tracing::warn!(?offset, %error, "attendance status refresh failed");
                }
            }
        }
    })
}
