// Reverse geocoding through the Google Geocoding API.

use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::ports::reverse_geocoder::{GeocodingError, ReverseGeocoder};
use async_trait::async_trait;
use serde::Deserialize;

pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

pub struct GoogleReverseGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
}

impl GoogleReverseGeocoder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: GOOGLE_GEOCODE_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// First formatted address of an `OK` answer.
pub fn label_from_response(response: GeocodeResponse) -> Result<String, GeocodingError> {
    match response.status.as_str() {
        "OK" => response
            .results
            .into_iter()
            .map(|r| r.formatted_address)
            .find(|address| !address.trim().is_empty())
            .ok_or(GeocodingError::NoResults),
        "ZERO_RESULTS" => Err(GeocodingError::NoResults),
        _ => Err(GeocodingError::Status(response.status)),
    }
}

#[async_trait]
impl ReverseGeocoder for GoogleReverseGeocoder {
    async fn reverse_geocode(&self, point: &GeoPoint) -> Result<String, GeocodingError> {
        let latlng = format!("{},{}", point.latitude, point.longitude);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("latlng", latlng.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Request(format!("HTTP {status}")));
        }

        let body = response
            .json::<GeocodeResponse>()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;
        label_from_response(body)
    }
}
