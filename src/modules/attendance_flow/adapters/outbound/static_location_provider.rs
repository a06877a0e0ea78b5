use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::ports::location::{
    LocationError, LocationProvider, PositionOptions,
};
use async_trait::async_trait;

/// Device position taken from configuration, for hosts without a
/// positioning service.
pub struct StaticLocationProvider {
    position: Option<GeoPoint>,
}

impl StaticLocationProvider {
    pub fn new(position: Option<GeoPoint>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<GeoPoint, LocationError> {
        self.position.ok_or(LocationError::Unsupported)
    }
}
