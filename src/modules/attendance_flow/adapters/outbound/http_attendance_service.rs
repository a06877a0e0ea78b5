// Attendance service port over the attendance HTTP API.

use crate::modules::attendance::use_cases::record_attendance::inbound::http::{
    ErrorBody, RecordAttendanceBody,
};
use crate::modules::attendance_flow::core::geofence::GeofenceConfig;
use crate::modules::attendance_flow::ports::attendance_service::{
    AttendanceService, AttendanceServiceError, PunchSubmission,
};
use crate::shared::core::attendance_day::AttendanceDayState;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub struct HttpAttendanceService {
    client: reqwest::Client,
    base_url: String,
    employee_id: String,
}

impl HttpAttendanceService {
    /// * `base_url` - e.g. `http://127.0.0.1:8080`, without the `/attendance` prefix.
    pub fn new(base_url: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, employee_id)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        employee_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            employee_id: employee_id.into(),
        }
    }

    /// The boundary the server enforces, so the client evaluates against the
    /// same office.
    pub async fn fetch_geofence(&self) -> Result<GeofenceConfig, AttendanceServiceError> {
        let response = self
            .client
            .get(format!("{}/attendance/geofence", self.base_url))
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse_response(response).await
    }

    async fn post_punch(
        &self,
        path: &str,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        let body = RecordAttendanceBody {
            employee_id: self.employee_id.clone(),
            latitude: submission.latitude,
            longitude: submission.longitude,
            location_label: submission.location_label.clone(),
            reason: submission.reason.clone(),
            outside_geofence: submission.outside_geofence,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AttendanceServiceError> {
        let status = response.status();
        if status == StatusCode::CONFLICT {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(AttendanceServiceError::Rejected(reason));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AttendanceServiceError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AttendanceServiceError::InvalidResponse(e.to_string()))
    }
}

fn transport_error(error: reqwest::Error) -> AttendanceServiceError {
    AttendanceServiceError::Unavailable(error.to_string())
}

#[async_trait]
impl AttendanceService for HttpAttendanceService {
    async fn record_check_in(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.post_punch("/attendance/check-in", submission).await
    }

    async fn record_check_out(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.post_punch("/attendance/check-out", submission).await
    }

    async fn get_today_status(&self) -> Result<AttendanceDayState, AttendanceServiceError> {
        let response = self
            .client
            .get(format!("{}/attendance/today", self.base_url))
            .query(&[("employee_id", self.employee_id.as_str())])
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod http_attendance_service_tests {
    use super::*;
    use axum::{Router, http::StatusCode as AxumStatus, routing::get};
    use rstest::rstest;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/")
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_unexpected_statuses_with_the_body() {
        let base_url = serve(Router::new().route(
            "/attendance/today",
            get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "maintenance") }),
        ))
        .await;
        let service = HttpAttendanceService::new(base_url, "emp-1");

        let error = service.get_today_status().await.unwrap_err();

        assert!(matches!(
            error,
            AttendanceServiceError::UnexpectedStatus { status: 503, ref body } if body == "maintenance"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_body_that_is_not_a_day_state() {
        let base_url = serve(Router::new().route(
            "/attendance/today",
            get(|| async { "[]" }),
        ))
        .await;
        let service = HttpAttendanceService::new(base_url, "emp-1");

        let error = service.get_today_status().await.unwrap_err();

        assert!(matches!(error, AttendanceServiceError::InvalidResponse(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unreachable_service_as_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = HttpAttendanceService::new(format!("http://{addr}"), "emp-1");

        let error = service.get_today_status().await.unwrap_err();

        assert!(matches!(error, AttendanceServiceError::Unavailable(_)));
    }
}
