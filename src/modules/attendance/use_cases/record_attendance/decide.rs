// Pure decision for a punch. One check-in and one check-out per day, in order.

use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::events::v1::checked_in::CheckedInV1;
use crate::modules::attendance::core::events::v1::checked_out::CheckedOutV1;
use crate::modules::attendance::core::state::AttendanceDayRecord;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::modules::attendance::use_cases::record_attendance::decision::{DecideError, Decision};
use crate::shared::core::attendance_day::AttendanceAction;

pub fn decide_record(state: &AttendanceDayRecord, command: RecordAttendance) -> Decision {
    let reason = command
        .reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    match (command.action, state) {
        (AttendanceAction::CheckIn, AttendanceDayRecord::None) => Decision::Accepted {
            events: vec![AttendanceEvent::CheckedInV1(CheckedInV1 {
                attendance_id: command.attendance_id,
                employee_id: command.employee_id,
                occurred_at: command.occurred_at,
                latitude: command.latitude,
                longitude: command.longitude,
                location_label: command.location_label,
                reason,
                outside_geofence: command.outside_geofence,
            })],
        },
        (AttendanceAction::CheckIn, _) => Decision::Rejected {
            reason: DecideError::AlreadyCheckedIn,
        },
        (AttendanceAction::CheckOut, AttendanceDayRecord::None) => Decision::Rejected {
            reason: DecideError::NotCheckedIn,
        },
        (AttendanceAction::CheckOut, AttendanceDayRecord::CheckedIn { check_in, .. }) => {
            if command.occurred_at < check_in.occurred_at {
                return Decision::Rejected {
                    reason: DecideError::InvalidInterval,
                };
            }
            Decision::Accepted {
                events: vec![AttendanceEvent::CheckedOutV1(CheckedOutV1 {
                    attendance_id: check_in.attendance_id.clone(),
                    employee_id: command.employee_id,
                    occurred_at: command.occurred_at,
                    latitude: command.latitude,
                    longitude: command.longitude,
                    location_label: command.location_label,
                    reason,
                    outside_geofence: command.outside_geofence,
                })],
            }
        }
        (AttendanceAction::CheckOut, AttendanceDayRecord::CheckedOut { .. }) => {
            Decision::Rejected {
                reason: DecideError::AlreadyCheckedOut,
            }
        }
    }
}
