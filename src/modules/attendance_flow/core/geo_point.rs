use serde::{Deserialize, Serialize};

/// A captured device position. Accuracy is the platform's radius of
/// uncertainty in meters, when it reports one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Submitted when geofencing is disabled and no position is captured.
    pub const fn placeholder() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `"lat, lon"` with six decimals, used whenever no address is available.
    pub fn coordinate_label(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
