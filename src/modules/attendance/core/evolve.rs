use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::state::{AttendanceDayRecord, Punch};

pub fn evolve(state: AttendanceDayRecord, event: AttendanceEvent) -> AttendanceDayRecord {
    match (state, event) {
        (AttendanceDayRecord::None, AttendanceEvent::CheckedInV1(e)) => {
            AttendanceDayRecord::CheckedIn {
                employee_id: e.employee_id,
                check_in: Punch {
                    attendance_id: e.attendance_id,
                    occurred_at: e.occurred_at,
                    latitude: e.latitude,
                    longitude: e.longitude,
                    location_label: e.location_label,
                    reason: e.reason,
                    outside_geofence: e.outside_geofence,
                },
            }
        }
        (
            AttendanceDayRecord::CheckedIn {
                employee_id,
                check_in,
            },
            AttendanceEvent::CheckedOutV1(e),
        ) => AttendanceDayRecord::CheckedOut {
            employee_id,
            check_in,
            check_out: Punch {
                attendance_id: e.attendance_id,
                occurred_at: e.occurred_at,
                latitude: e.latitude,
                longitude: e.longitude,
                location_label: e.location_label,
                reason: e.reason,
                outside_geofence: e.outside_geofence,
            },
        },
        (state, _) => state,
    }
}
