// Office geofence: haversine distance and inside/outside classification.
//
// Pure functions only. The config is injected by the caller and never read
// from global state.

use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeofenceConfigError {
    #[error("geofence radius must be a positive number of meters, got {0}")]
    InvalidRadius(f64),

    #[error("geofence center is not a valid coordinate: {latitude}, {longitude}")]
    InvalidCenter { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub radius_meters: f64,
    pub enabled: bool,
    /// When set, a punch outside the boundary needs a written justification.
    pub required: bool,
}

impl GeofenceConfig {
    pub fn new(
        center_latitude: f64,
        center_longitude: f64,
        radius_meters: f64,
        enabled: bool,
        required: bool,
    ) -> Result<Self, GeofenceConfigError> {
        let config = Self {
            center_latitude,
            center_longitude,
            radius_meters,
            enabled,
            required,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GeofenceConfigError> {
        if !self.enabled {
            return Ok(());
        }
        if !self.center().is_valid() {
            return Err(GeofenceConfigError::InvalidCenter {
                latitude: self.center_latitude,
                longitude: self.center_longitude,
            });
        }
        if !(self.radius_meters.is_finite() && self.radius_meters > 0.0) {
            return Err(GeofenceConfigError::InvalidRadius(self.radius_meters));
        }
        Ok(())
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_latitude, self.center_longitude)
    }
}

impl Default for GeofenceConfig {
    /// Head office boundary.
    fn default() -> Self {
        Self {
            center_latitude: 25.6146836,
            center_longitude: 85.1126175,
            radius_meters: 50.0,
            enabled: true,
            required: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeofenceVerdict {
    pub point: GeoPoint,
    pub distance_meters: f64,
    pub within_bounds: bool,
}

/// Great-circle distance between two points, in meters.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// A disabled geofence admits every point and reports a zero distance.
/// The boundary itself is inside.
pub fn evaluate(point: GeoPoint, config: &GeofenceConfig) -> GeofenceVerdict {
    if !config.enabled {
        return GeofenceVerdict {
            point,
            distance_meters: 0.0,
            within_bounds: true,
        };
    }

    let distance_meters = distance(&point, &config.center());
    GeofenceVerdict {
        point,
        distance_meters,
        within_bounds: distance_meters <= config.radius_meters,
    }
}
