// Command to record one punch (check-in or check-out) for an employee's day.
// Transport agnostic: HTTP, GraphQL and the in-process adapter all build it.

use crate::shared::core::attendance_day::AttendanceAction;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordAttendance {
    pub attendance_id: String,
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub action: AttendanceAction,
    pub occurred_at: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub location_label: String,
    pub reason: Option<String>,
    pub outside_geofence: bool,
}
