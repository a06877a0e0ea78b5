// Runtime configuration, read once from the environment at startup.

use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::core::geofence::{GeofenceConfig, GeofenceConfigError};
use crate::modules::attendance_flow::use_cases::check_in_out::controller::DEFAULT_GEOCODE_TIMEOUT;
use crate::modules::attendance_flow::use_cases::check_in_out::refresh::RefreshSchedule;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{set} is set but {missing} is not")]
    Incomplete {
        set: &'static str,
        missing: &'static str,
    },

    #[error(transparent)]
    Geofence(#[from] GeofenceConfigError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub geofence: GeofenceConfig,
    pub refresh_schedule: RefreshSchedule,
    pub geocoding_api_key: Option<String>,
    pub geocoding_timeout: Duration,
    pub attendance_api_url: String,
    pub employee_id: Option<String>,
    pub device_position: Option<GeoPoint>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                      | Default                  |
    /// |------------------------------|--------------------------|
    /// | `HOST`                       | `0.0.0.0`                |
    /// | `PORT`                       | `8080`                   |
    /// | `GEOFENCE_CENTER_LATITUDE`   | `25.6146836`             |
    /// | `GEOFENCE_CENTER_LONGITUDE`  | `85.1126175`             |
    /// | `GEOFENCE_RADIUS_METERS`     | `50`                     |
    /// | `GEOFENCE_ENABLED`           | `true`                   |
    /// | `GEOFENCE_REQUIRED`          | `true`                   |
    /// | `STATUS_REFRESH_DELAYS_MS`   | `500,1500`               |
    /// | `GEOCODING_API_KEY`          | unset                    |
    /// | `GEOCODING_TIMEOUT_MS`       | `3000`                   |
    /// | `ATTENDANCE_API_URL`         | `http://127.0.0.1:8080`  |
    /// | `EMPLOYEE_ID`                | unset                    |
    /// | `DEVICE_LATITUDE`            | unset                    |
    /// | `DEVICE_LONGITUDE`           | unset                    |
    /// | `DEVICE_ACCURACY_METERS`     | unset                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);
        let defaults = GeofenceConfig::default();

        let geofence = GeofenceConfig::new(
            env.parse("GEOFENCE_CENTER_LATITUDE", defaults.center_latitude)?,
            env.parse("GEOFENCE_CENTER_LONGITUDE", defaults.center_longitude)?,
            env.parse("GEOFENCE_RADIUS_METERS", defaults.radius_meters)?,
            env.flag("GEOFENCE_ENABLED", defaults.enabled)?,
            env.flag("GEOFENCE_REQUIRED", defaults.required)?,
        )?;

        let refresh_schedule = match env.get("STATUS_REFRESH_DELAYS_MS") {
            None => RefreshSchedule::default(),
            Some(raw) => parse_delays(&raw)?,
        };

        Ok(Self {
            host: env.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: env.parse("PORT", 8080)?,
            geofence,
            refresh_schedule,
            geocoding_api_key: env.get("GEOCODING_API_KEY"),
            geocoding_timeout: Duration::from_millis(env.parse(
                "GEOCODING_TIMEOUT_MS",
                DEFAULT_GEOCODE_TIMEOUT.as_millis() as u64,
            )?),
            attendance_api_url: env
                .get("ATTENDANCE_API_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8080".to_string()),
            employee_id: env.get("EMPLOYEE_ID"),
            device_position: device_position(&env)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn require_employee_id(&self) -> Result<&str, ConfigError> {
        self.employee_id
            .as_deref()
            .ok_or(ConfigError::Missing("EMPLOYEE_ID"))
    }
}

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Unset and blank are the same thing.
    fn get(&self, var: &str) -> Option<String> {
        (self.0)(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T>(&self, var: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(var) {
            None => Ok(default),
            Some(value) => parse_value(var, value),
        }
    }

    fn flag(&self, var: &'static str, default: bool) -> Result<bool, ConfigError> {
        match self.get(var) {
            None => Ok(default),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::Invalid {
                    var,
                    value,
                    reason: "expected true or false".into(),
                }),
            },
        }
    }
}

fn parse_value<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

fn parse_delays(raw: &str) -> Result<RefreshSchedule, ConfigError> {
    let delays = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_value::<u64>("STATUS_REFRESH_DELAYS_MS", part.to_string()))
        .map(|ms| ms.map(Duration::from_millis))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RefreshSchedule::new(delays))
}

fn device_position<F>(env: &Env<F>) -> Result<Option<GeoPoint>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let latitude = env.get("DEVICE_LATITUDE");
    let longitude = env.get("DEVICE_LONGITUDE");
    let (latitude, longitude) = match (latitude, longitude) {
        (None, None) => return Ok(None),
        (Some(_), None) => {
            return Err(ConfigError::Incomplete {
                set: "DEVICE_LATITUDE",
                missing: "DEVICE_LONGITUDE",
            });
        }
        (None, Some(_)) => {
            return Err(ConfigError::Incomplete {
                set: "DEVICE_LONGITUDE",
                missing: "DEVICE_LATITUDE",
            });
        }
        (Some(lat), Some(lon)) => (
            parse_value::<f64>("DEVICE_LATITUDE", lat)?,
            parse_value::<f64>("DEVICE_LONGITUDE", lon)?,
        ),
    };

    let mut point = GeoPoint::new(latitude, longitude);
    if let Some(accuracy) = env.get("DEVICE_ACCURACY_METERS") {
        point = point.with_accuracy(parse_value("DEVICE_ACCURACY_METERS", accuracy)?);
    }
    if !point.is_valid() {
        return Err(ConfigError::Invalid {
            var: "DEVICE_LATITUDE",
            value: point.coordinate_label(),
            reason: "not a valid coordinate".into(),
        });
    }
    Ok(Some(point))
}
