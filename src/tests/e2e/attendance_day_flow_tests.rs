use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::stream::{attendance_day_stream_id, current_work_date};
use crate::modules::attendance_flow::adapters::outbound::local_attendance_service::LocalAttendanceService;
use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::core::geofence::GeofenceConfig;
use crate::modules::attendance_flow::use_cases::check_in_out::controller::AttendanceFlowController;
use crate::modules::attendance_flow::use_cases::check_in_out::outcome::FlowOutcome;
use crate::modules::attendance_flow::use_cases::check_in_out::refresh::RefreshSchedule;
use crate::modules::attendance_flow::use_cases::probe_location::probe::LocationProbe;
use crate::shared::core::attendance_day::{AttendanceAction, DayProgress};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::tests::fixtures::fakes::{ScriptedJustificationPrompt, ScriptedLocationProvider};
use std::sync::Arc;

#[tokio::test]
async fn records_a_full_day_through_the_flow() {
    let store = Arc::new(InMemoryEventStore::<AttendanceEvent>::new());
    let service = Arc::new(LocalAttendanceService::new(store.clone(), "emp-1"));
    let provider = Arc::new(ScriptedLocationProvider::new(vec![
        Ok(GeoPoint::new(25.6146836, 85.1126175)),
        Ok(GeoPoint::new(25.6164823, 85.1126175)),
    ]));
    let controller = AttendanceFlowController::new(
        GeofenceConfig::default(),
        LocationProbe::new(provider),
        service,
    )
    .with_refresh_schedule(RefreshSchedule::none());

    let morning = controller
        .run(
            AttendanceAction::CheckIn,
            &ScriptedJustificationPrompt::default(),
        )
        .await
        .unwrap();
    assert!(matches!(
        morning,
        FlowOutcome::Settled(ref p) if p.action == AttendanceAction::CheckIn
    ));

    // Pressing check-in again in the evening still records the check-out.
    let evening = controller
        .run(
            AttendanceAction::CheckIn,
            &ScriptedJustificationPrompt::providing(&["Client site visit"]),
        )
        .await
        .unwrap();
    let FlowOutcome::Settled(punch) = evening else {
        panic!("expected a settled check-out, got {evening:?}");
    };
    assert_eq!(punch.action, AttendanceAction::CheckOut);
    assert_eq!(punch.day.progress(), DayProgress::DayComplete);

    let again = controller
        .run(
            AttendanceAction::CheckOut,
            &ScriptedJustificationPrompt::default(),
        )
        .await
        .unwrap();
    assert_eq!(again, FlowOutcome::DayAlreadyComplete);

    let stream_id = attendance_day_stream_id("emp-1", current_work_date());
    let stream = store.load(&stream_id).await.unwrap();
    assert_eq!(stream.version, 2);
    let [
        AttendanceEvent::CheckedInV1(checked_in),
        AttendanceEvent::CheckedOutV1(checked_out),
    ] = stream.events.as_slice()
    else {
        panic!("unexpected events: {:?}", stream.events);
    };
    assert_eq!(checked_in.attendance_id, checked_out.attendance_id);
    assert!(!checked_in.outside_geofence);
    assert_eq!(checked_in.reason, None);
    assert!(checked_out.outside_geofence);
    assert_eq!(checked_out.reason.as_deref(), Some("Client site visit"));
    assert_eq!(
        checked_out.location_label,
        GeoPoint::new(25.6164823, 85.1126175).coordinate_label()
    );
}
