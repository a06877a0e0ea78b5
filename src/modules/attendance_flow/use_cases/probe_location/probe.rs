// One location request against the device provider.
//
// The probe enforces the attempt timeout itself and rejects malformed fixes, so
// the flow only ever sees a valid point or one of the four location errors. It
// never retries: the flow decides whether a fallback attempt runs.

use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::ports::location::{
    LocationError, LocationProvider, PositionOptions,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeAttempt {
    Primary,
    Fallback,
}

pub struct LocationProbe<TProvider>
where
    TProvider: LocationProvider + ?Sized,
{
    provider: Arc<TProvider>,
    primary: PositionOptions,
    fallback: PositionOptions,
}

impl<TProvider> LocationProbe<TProvider>
where
    TProvider: LocationProvider + ?Sized,
{
    pub fn new(provider: Arc<TProvider>) -> Self {
        Self {
            provider,
            primary: PositionOptions::PRIMARY,
            fallback: PositionOptions::FALLBACK,
        }
    }

    pub fn with_options(mut self, primary: PositionOptions, fallback: PositionOptions) -> Self {
        self.primary = primary;
        self.fallback = fallback;
        self
    }

    pub fn options(&self, attempt: ProbeAttempt) -> PositionOptions {
        match attempt {
            ProbeAttempt::Primary => self.primary,
            ProbeAttempt::Fallback => self.fallback,
        }
    }

    pub async fn acquire(&self, attempt: ProbeAttempt) -> Result<GeoPoint, LocationError> {
        let options = self.options(attempt);
        let result = tokio::time::timeout(options.timeout, self.provider.current_position(&options))
            .await
            .unwrap_or(Err(LocationError::Timeout));

        match result {
            Ok(point) if point.is_valid() => {
                tracing::debug!(?attempt, accuracy = ?point.accuracy, "position acquired");
                Ok(point)
            }
            Ok(point) => {
                tracing::warn!(?attempt, ?point, "provider returned an invalid position");
                Err(LocationError::PositionUnavailable)
            }
            Err(error) => {
                tracing::debug!(?attempt, %error, "position request failed");
                Err(error)
            }
        }
    }
}
