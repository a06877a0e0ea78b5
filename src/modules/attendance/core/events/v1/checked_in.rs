use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckedInV1 {
    pub attendance_id: String,
    pub employee_id: String,
    pub occurred_at: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub location_label: String,
    pub reason: Option<String>,
    pub outside_geofence: bool,
}
