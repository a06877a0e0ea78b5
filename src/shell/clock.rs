// `geo_attendance clock [check-in|check-out]`: one punch from this machine
// against a running attendance API.

use crate::modules::attendance_flow::adapters::inbound::stdin_prompt::LinePrompt;
use crate::modules::attendance_flow::adapters::outbound::google_reverse_geocoder::GoogleReverseGeocoder;
use crate::modules::attendance_flow::adapters::outbound::http_attendance_service::HttpAttendanceService;
use crate::modules::attendance_flow::adapters::outbound::static_location_provider::StaticLocationProvider;
use crate::modules::attendance_flow::use_cases::check_in_out::controller::AttendanceFlowController;
use crate::modules::attendance_flow::use_cases::check_in_out::outcome::FlowOutcome;
use crate::modules::attendance_flow::use_cases::probe_location::probe::LocationProbe;
use crate::shared::core::attendance_day::AttendanceAction;
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub async fn run(config: &AppConfig, requested: AttendanceAction) -> anyhow::Result<()> {
    let service = Arc::new(HttpAttendanceService::new(
        config.attendance_api_url.as_str(),
        config.require_employee_id()?,
    ));

    let geofence = match service.fetch_geofence().await {
        Ok(geofence) => geofence,
        Err(error) => {
            tracing::warn!(
                %error,
                "could not fetch the server geofence, using local configuration"
            );
            config.geofence
        }
    };

    let provider = Arc::new(StaticLocationProvider::new(config.device_position));
    let mut controller =
        AttendanceFlowController::new(geofence, LocationProbe::new(provider), service)
            .with_refresh_schedule(config.refresh_schedule.clone())
            .with_geocode_timeout(config.geocoding_timeout);
    if let Some(api_key) = &config.geocoding_api_key {
        let geocoder = GoogleReverseGeocoder::new(api_key.as_str());
        controller = controller.with_geocoder(Arc::new(geocoder));
    }

    let outcome = controller.run(requested, &LinePrompt::stdio()).await?;
    match outcome {
        FlowOutcome::Settled(punch) => {
            println!("Recorded {} at {}.", punch.action, punch.location_label);
            if let Some(verdict) = punch.verdict.filter(|v| !v.within_bounds) {
                println!(
                    "Marked as a location exception ({:.0} m from the office).",
                    verdict.distance_meters
                );
            }
            // Let the scheduled status refreshes land before exiting.
            if let Some(last) = config.refresh_schedule.offsets().last() {
                tokio::time::sleep(*last).await;
            }
            if let Some(day) = controller.status_cache().get().await {
                println!("Today: {:?}", day.progress());
            }
        }
        FlowOutcome::Cancelled { action } => println!("{action} cancelled, nothing was recorded."),
        FlowOutcome::DayAlreadyComplete => {
            println!("You have already checked in and out today.")
        }
    }
    Ok(())
}
