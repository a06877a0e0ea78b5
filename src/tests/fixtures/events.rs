use crate::modules::attendance::core::events::v1::checked_in::CheckedInV1;
use crate::modules::attendance::core::events::v1::checked_out::CheckedOutV1;

pub fn make_checked_in_v1_event() -> CheckedInV1 {
    CheckedInV1 {
        attendance_id: "att-fixed-0001".into(),
        employee_id: "emp-fixed-0001".into(),
        occurred_at: 1_700_000_000_000,
        latitude: 25.6146836,
        longitude: 85.1126175,
        location_label: "Head office".into(),
        reason: None,
        outside_geofence: false,
    }
}

pub fn make_checked_out_v1_event() -> CheckedOutV1 {
    CheckedOutV1 {
        attendance_id: "att-fixed-0001".into(),
        employee_id: "emp-fixed-0001".into(),
        occurred_at: 1_700_000_360_000,
        latitude: 25.6164836,
        longitude: 85.1126175,
        location_label: "25.616484, 85.112618".into(),
        reason: Some("Client site visit".into()),
        outside_geofence: true,
    }
}
