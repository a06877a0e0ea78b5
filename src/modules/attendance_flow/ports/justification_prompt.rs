use crate::modules::attendance_flow::core::geofence::GeofenceVerdict;
use crate::modules::attendance_flow::core::justification::JustificationError;
use crate::shared::core::attendance_day::AttendanceAction;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct JustificationRequest {
    pub action: AttendanceAction,
    pub verdict: GeofenceVerdict,
    pub radius_meters: f64,
    /// Set when the previous answer was rejected.
    pub rejected: Option<JustificationError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JustificationReply {
    Provided(String),
    Cancelled,
}

/// UI seam asking the employee why they are punching outside the boundary.
#[async_trait]
pub trait JustificationPrompt: Send + Sync {
    async fn request(&self, request: &JustificationRequest) -> JustificationReply;
}
