use crate::modules::attendance_flow::adapters::outbound::http_attendance_service::HttpAttendanceService;
use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::core::geofence::GeofenceConfig;
use crate::modules::attendance_flow::ports::attendance_service::{
    AttendanceService, AttendanceServiceError, PunchSubmission,
};
use crate::modules::attendance_flow::use_cases::check_in_out::controller::AttendanceFlowController;
use crate::modules::attendance_flow::use_cases::check_in_out::outcome::FlowOutcome;
use crate::modules::attendance_flow::use_cases::check_in_out::refresh::RefreshSchedule;
use crate::modules::attendance_flow::use_cases::probe_location::probe::LocationProbe;
use crate::shared::core::attendance_day::{AttendanceAction, DayProgress};
use crate::shell::http::app;
use crate::shell::state::{AppState, AttendanceEventStore};
use crate::tests::fixtures::fakes::{ScriptedJustificationPrompt, ScriptedLocationProvider};
use std::sync::Arc;
use std::time::Duration;

async fn spawn_api(geofence: GeofenceConfig) -> String {
    let state = AppState::in_memory(Arc::new(AttendanceEventStore::new()), geofence);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app(state)).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn checks_in_over_http_and_refreshes_the_status() {
    let geofence = GeofenceConfig::new(25.6146836, 85.1126175, 100.0, true, true).unwrap();
    let base_url = spawn_api(geofence).await;
    let service = Arc::new(HttpAttendanceService::new(base_url.as_str(), "emp-1"));

    assert_eq!(service.fetch_geofence().await.unwrap(), geofence);

    let provider = Arc::new(ScriptedLocationProvider::new(vec![Ok(GeoPoint::new(
        25.6150, 85.1127,
    ))]));
    let controller = AttendanceFlowController::new(
        geofence,
        LocationProbe::new(provider),
        service.clone(),
    )
    .with_refresh_schedule(RefreshSchedule::new(vec![Duration::from_millis(20)]));

    let outcome = controller
        .run(
            AttendanceAction::CheckIn,
            &ScriptedJustificationPrompt::default(),
        )
        .await
        .unwrap();
    let FlowOutcome::Settled(punch) = outcome else {
        panic!("expected a settled check-in, got {outcome:?}");
    };
    assert_eq!(punch.day.progress(), DayProgress::CheckedInOnly);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.status_cache().generation(), 3);
    assert_eq!(
        controller.status_cache().get().await,
        Some(service.get_today_status().await.unwrap())
    );

    // The server refuses a second check-in even when a client skips the flow.
    let submission = PunchSubmission {
        latitude: 25.6150,
        longitude: 85.1127,
        location_label: "Head office".into(),
        reason: None,
        outside_geofence: false,
    };
    let error = service.record_check_in(&submission).await.unwrap_err();
    assert!(
        matches!(error, AttendanceServiceError::Rejected(ref reason) if reason == "already checked in today")
    );
}

#[tokio::test]
async fn keeps_employees_apart() {
    let base_url = spawn_api(GeofenceConfig::default()).await;
    let alice = HttpAttendanceService::new(base_url.as_str(), "emp-alice");
    let bob = HttpAttendanceService::new(base_url.as_str(), "emp-bob");
    let submission = PunchSubmission {
        latitude: 25.6146836,
        longitude: 85.1126175,
        location_label: "Head office".into(),
        reason: None,
        outside_geofence: false,
    };

    alice.record_check_in(&submission).await.unwrap();

    assert!(alice.get_today_status().await.unwrap().is_checked_in);
    assert_eq!(
        bob.get_today_status().await.unwrap().progress(),
        DayProgress::NotCheckedIn
    );
    assert!(matches!(
        bob.record_check_out(&submission).await,
        Err(AttendanceServiceError::Rejected(_))
    ));
}
