use crate::shared::core::attendance_day::AttendanceDayState;

/// A single recorded punch, either the check-in or the check-out of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct Punch {
    pub attendance_id: String,
    pub occurred_at: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub location_label: String,
    pub reason: Option<String>,
    pub outside_geofence: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceDayRecord {
    None,
    CheckedIn {
        employee_id: String,
        check_in: Punch,
    },
    CheckedOut {
        employee_id: String,
        check_in: Punch,
        check_out: Punch,
    },
}

impl AttendanceDayRecord {
    pub fn to_day_state(&self) -> AttendanceDayState {
        match self {
            AttendanceDayRecord::None => AttendanceDayState::default(),
            AttendanceDayRecord::CheckedIn { check_in, .. } => AttendanceDayState {
                is_checked_in: true,
                check_in_time: Some(check_in.occurred_at),
                check_out_time: None,
            },
            AttendanceDayRecord::CheckedOut {
                check_in,
                check_out,
                ..
            } => AttendanceDayState {
                is_checked_in: false,
                check_in_time: Some(check_in.occurred_at),
                check_out_time: Some(check_out.occurred_at),
            },
        }
    }
}
