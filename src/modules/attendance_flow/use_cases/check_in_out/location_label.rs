use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::ports::reverse_geocoder::ReverseGeocoder;
use std::time::Duration;

/// Address for the punch, or the coordinates when the lookup fails, is slow
/// or no geocoder is configured. Never fails.
pub async fn resolve_location_label(
    geocoder: Option<&dyn ReverseGeocoder>,
    point: &GeoPoint,
    timeout: Duration,
) -> String {
    let Some(geocoder) = geocoder else {
        return point.coordinate_label();
    };

    match tokio::time::timeout(timeout, geocoder.reverse_geocode(point)).await {
        Ok(Ok(label)) if !label.trim().is_empty() => label.trim().to_string(),
        Ok(Ok(_)) => point.coordinate_label(),
        Ok(Err(error)) => {
            tracing::warn!(%error, "reverse geocoding failed, using coordinates");
            point.coordinate_label()
        }
        Err(_) => {
            tracing::warn!(?timeout, "reverse geocoding timed out, using coordinates");
            point.coordinate_label()
        }
    }
}
