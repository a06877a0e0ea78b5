// Last known attendance day as seen by this client.
//
// The service is the source of truth. The cache is invalidated when a punch is
// submitted and refilled from the submission response and the scheduled
// status refreshes that follow it.

use crate::shared::core::attendance_day::AttendanceDayState;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct AttendanceStatusCache {
    current: RwLock<Option<AttendanceDayState>>,
    generation: AtomicU64,
}

impl AttendanceStatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<AttendanceDayState> {
        self.current.read().await.clone()
    }

    pub async fn store(&self, day: AttendanceDayState) {
        *self.current.write().await = Some(day);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    /// Number of stores so far; lets a view tell whether it is out of date.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
