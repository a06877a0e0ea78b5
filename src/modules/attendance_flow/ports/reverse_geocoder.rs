use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("geocoding request failed: {0}")]
    Request(String),

    #[error("geocoding returned status {0}")]
    Status(String),

    #[error("geocoding returned no results")]
    NoResults,
}

/// Best-effort address lookup for a punch location.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse_geocode(&self, point: &GeoPoint) -> Result<String, GeocodingError>;
}
