// Device location port.
//
// Implementations wrap whatever the platform offers (a GPS fix, a browser
// geolocation bridge, a configured kiosk position). They perform one request per
// call and never retry; retry policy belongs to the check-in flow.

use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied; allow location access and try again")]
    PermissionDenied,

    #[error("current position is unavailable")]
    PositionUnavailable,

    #[error("timed out while acquiring the current position")]
    Timeout,

    #[error("location services are not supported on this device")]
    Unsupported,
}

impl LocationError {
    /// Transient failures worth one low-accuracy retry.
    pub fn allows_fallback(self) -> bool {
        matches!(
            self,
            LocationError::PositionUnavailable | LocationError::Timeout
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached fix the platform may hand back instead of a fresh one.
    pub maximum_age: Duration,
}

impl PositionOptions {
    pub const PRIMARY: Self = Self {
        enable_high_accuracy: true,
        timeout: Duration::from_millis(15_000),
        maximum_age: Duration::from_millis(300_000),
    };

    pub const FALLBACK: Self = Self {
        enable_high_accuracy: false,
        timeout: Duration::from_millis(5_000),
        maximum_age: Duration::from_millis(60_000),
    };
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<GeoPoint, LocationError>;
}
