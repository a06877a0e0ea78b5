// Shared test fixture for the RecordAttendance command.

use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::shared::core::attendance_day::AttendanceAction;
use chrono::NaiveDate;

pub const FIXED_OCCURRED_AT: i64 = 1_700_000_000_000;

pub struct RecordAttendanceBuilder {
    inner: RecordAttendance,
}

impl Default for RecordAttendanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordAttendanceBuilder {
    pub fn new() -> Self {
        Self {
            inner: RecordAttendance {
                attendance_id: "att-fixed-0001".to_string(),
                employee_id: "emp-fixed-0001".to_string(),
                work_date: NaiveDate::from_ymd_opt(2023, 11, 14).unwrap(),
                action: AttendanceAction::CheckIn,
                occurred_at: FIXED_OCCURRED_AT,
                latitude: 25.6146836,
                longitude: 85.1126175,
                location_label: "Head office".to_string(),
                reason: None,
                outside_geofence: false,
            },
        }
    }

    pub fn attendance_id(mut self, v: impl Into<String>) -> Self {
        self.inner.attendance_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn work_date(mut self, v: NaiveDate) -> Self {
        self.inner.work_date = v;
        self
    }

    pub fn check_out(mut self) -> Self {
        self.inner.action = AttendanceAction::CheckOut;
        self
    }

    pub fn occurred_at(mut self, v: i64) -> Self {
        self.inner.occurred_at = v;
        self
    }

    pub fn reason(mut self, v: Option<String>) -> Self {
        self.inner.reason = v;
        self
    }

    pub fn outside_geofence(mut self, v: bool) -> Self {
        self.inner.outside_geofence = v;
        self
    }

    pub fn build(self) -> RecordAttendance {
        self.inner
    }
}

#[cfg(test)]
mod record_attendance_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let command = RecordAttendanceBuilder::new()
            .attendance_id("att-9")
            .employee_id("emp-9")
            .check_out()
            .occurred_at(42)
            .reason(Some("late".into()))
            .outside_geofence(true)
            .build();

        assert_eq!(command.attendance_id, "att-9");
        assert_eq!(command.employee_id, "emp-9");
        assert_eq!(command.action, AttendanceAction::CheckOut);
        assert_eq!(command.occurred_at, 42);
        assert_eq!(command.reason.as_deref(), Some("late"));
        assert!(command.outside_geofence);
    }
}
