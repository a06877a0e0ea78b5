// Check-in / check-out flow.
//
// Idle -> LocatingPrimary -> [AwaitingJustification] -> Submitting -> Settled
//              |
//              +-> LocatingFallback -> [AwaitingJustification] -> Submitting
//              |          |
//              +----------+-> Failed
//
// The service decides which punch is next; the controller only reads the day
// and never submits an action that contradicts it. Location failures get one
// low-accuracy fallback, submissions are never retried.

use crate::modules::attendance_flow::core::flow_state::FlowState;
use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::core::geofence::{GeofenceConfig, GeofenceVerdict, evaluate};
use crate::modules::attendance_flow::core::justification::Justification;
use crate::modules::attendance_flow::ports::attendance_service::{
    AttendanceService, PunchSubmission,
};
use crate::modules::attendance_flow::ports::justification_prompt::{
    JustificationPrompt, JustificationReply, JustificationRequest,
};
use crate::modules::attendance_flow::ports::location::LocationProvider;
use crate::modules::attendance_flow::ports::reverse_geocoder::ReverseGeocoder;
use crate::modules::attendance_flow::use_cases::check_in_out::location_label::resolve_location_label;
use crate::modules::attendance_flow::use_cases::check_in_out::outcome::{
    FlowError, FlowOutcome, SettledPunch,
};
use crate::modules::attendance_flow::use_cases::check_in_out::refresh::{
    RefreshSchedule, spawn_status_refreshes,
};
use crate::modules::attendance_flow::use_cases::check_in_out::status_cache::AttendanceStatusCache;
use crate::modules::attendance_flow::use_cases::probe_location::probe::{
    LocationProbe, ProbeAttempt,
};
use crate::shared::core::attendance_day::AttendanceAction;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};

pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_millis(3_000);

struct CapturedLocation {
    point: GeoPoint,
    verdict: Option<GeofenceVerdict>,
    justification: Option<Justification>,
    used_fallback: bool,
}

pub struct AttendanceFlowController<TLocation, TAttendance>
where
    TLocation: LocationProvider + ?Sized + 'static,
    TAttendance: AttendanceService + ?Sized + 'static,
{
    geofence: GeofenceConfig,
    probe: LocationProbe<TLocation>,
    attendance: Arc<TAttendance>,
    geocoder: Option<Arc<dyn ReverseGeocoder>>,
    geocode_timeout: Duration,
    refresh_schedule: RefreshSchedule,
    status_cache: Arc<AttendanceStatusCache>,
    state: watch::Sender<FlowState>,
    in_flight: Mutex<()>,
}

impl<TLocation, TAttendance> AttendanceFlowController<TLocation, TAttendance>
where
    TLocation: LocationProvider + ?Sized + 'static,
    TAttendance: AttendanceService + ?Sized + 'static,
{
    pub fn new(
        geofence: GeofenceConfig,
        probe: LocationProbe<TLocation>,
        attendance: Arc<TAttendance>,
    ) -> Self {
        let (state, _) = watch::channel(FlowState::Idle);
        Self {
            geofence,
            probe,
            attendance,
            geocoder: None,
            geocode_timeout: DEFAULT_GEOCODE_TIMEOUT,
            refresh_schedule: RefreshSchedule::default(),
            status_cache: Arc::new(AttendanceStatusCache::new()),
            state,
            in_flight: Mutex::new(()),
        }
    }

    pub fn with_geocoder(mut self, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    pub fn with_geocode_timeout(mut self, timeout: Duration) -> Self {
        self.geocode_timeout = timeout;
        self
    }

    pub fn with_refresh_schedule(mut self, schedule: RefreshSchedule) -> Self {
        self.refresh_schedule = schedule;
        self
    }

    pub fn with_status_cache(mut self, cache: Arc<AttendanceStatusCache>) -> Self {
        self.status_cache = cache;
        self
    }

    pub fn state(&self) -> FlowState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    pub fn status_cache(&self) -> Arc<AttendanceStatusCache> {
        self.status_cache.clone()
    }

    /// Runs one punch attempt. `requested` is what the employee pressed; the
    /// day state has the final say on which punch is submitted.
    #[tracing::instrument(skip_all, fields(requested = %requested))]
    pub async fn run<TPrompt>(
        &self,
        requested: AttendanceAction,
        prompt: &TPrompt,
    ) -> Result<FlowOutcome, FlowError>
    where
        TPrompt: JustificationPrompt + ?Sized,
    {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::warn!("attendance punch already in progress, ignoring trigger");
            return Err(FlowError::AlreadyInFlight);
        };

        self.transition(FlowState::Idle);
        let result = self.attempt(requested, prompt).await;

        match &result {
            Ok(FlowOutcome::Settled(punch)) => {
                tracing::info!(
                    action = %punch.action,
                    label = %punch.location_label,
                    used_fallback = punch.used_fallback,
                    "attendance punch settled"
                );
                self.transition(FlowState::Settled);
            }
            Ok(FlowOutcome::Cancelled { action }) => {
                tracing::info!(%action, "attendance punch cancelled");
                self.transition(FlowState::Idle);
            }
            Ok(FlowOutcome::DayAlreadyComplete) => {
                tracing::info!("attendance already complete for today");
                self.transition(FlowState::Idle);
            }
            Err(error) => {
                tracing::error!(%error, "attendance punch failed");
                self.transition(FlowState::Failed);
            }
        }
        result
    }

    async fn attempt<TPrompt>(
        &self,
        requested: AttendanceAction,
        prompt: &TPrompt,
    ) -> Result<FlowOutcome, FlowError>
    where
        TPrompt: JustificationPrompt + ?Sized,
    {
        let day = self
            .attendance
            .get_today_status()
            .await
            .map_err(FlowError::StatusUnavailable)?;
        self.status_cache.store(day.clone()).await;

        let Some(action) = day.progress().next_action() else {
            return Ok(FlowOutcome::DayAlreadyComplete);
        };
        if action != requested {
            tracing::info!(%requested, %action, "using the punch today's attendance allows");
        }

        if !self.geofence.enabled {
            let captured = CapturedLocation {
                point: GeoPoint::placeholder(),
                verdict: None,
                justification: None,
                used_fallback: false,
            };
            return self.submit(action, captured).await;
        }

        self.transition(FlowState::LocatingPrimary);
        let (point, used_fallback) = match self.probe.acquire(ProbeAttempt::Primary).await {
            Ok(point) => (point, false),
            Err(error) if error.allows_fallback() => {
                tracing::warn!(%error, "precise location failed, retrying with low accuracy");
                self.transition(FlowState::LocatingFallback);
                let point = self.probe.acquire(ProbeAttempt::Fallback).await?;
                (point, true)
            }
            Err(error) => return Err(FlowError::Location(error)),
        };

        let verdict = evaluate(point, &self.geofence);
        tracing::debug!(
            distance_meters = verdict.distance_meters,
            within_bounds = verdict.within_bounds,
            used_fallback,
            "geofence evaluated"
        );

        let justification = if !verdict.within_bounds && self.geofence.required {
            match self.collect_justification(action, &verdict, prompt).await {
                Some(justification) => Some(justification),
                None => return Ok(FlowOutcome::Cancelled { action }),
            }
        } else {
            None
        };

        let captured = CapturedLocation {
            point,
            verdict: Some(verdict),
            justification,
            used_fallback,
        };
        self.submit(action, captured).await
    }

    /// Re-prompts on blank text. Returns None when the employee cancels.
    async fn collect_justification<TPrompt>(
        &self,
        action: AttendanceAction,
        verdict: &GeofenceVerdict,
        prompt: &TPrompt,
    ) -> Option<Justification>
    where
        TPrompt: JustificationPrompt + ?Sized,
    {
        self.transition(FlowState::AwaitingJustification);
        let mut rejected = None;
        loop {
            let request = JustificationRequest {
                action,
                verdict: *verdict,
                radius_meters: self.geofence.radius_meters,
                rejected: rejected.take(),
            };
            match prompt.request(&request).await {
                JustificationReply::Cancelled => return None,
                JustificationReply::Provided(text) => match Justification::parse(&text) {
                    Ok(justification) => return Some(justification),
                    Err(error) => {
                        tracing::debug!(%error, "justification rejected, asking again");
                        rejected = Some(error);
                    }
                },
            }
        }
    }

    async fn submit(
        &self,
        action: AttendanceAction,
        captured: CapturedLocation,
    ) -> Result<FlowOutcome, FlowError> {
        self.transition(FlowState::Submitting);

        let location_label = if captured.verdict.is_some() {
            resolve_location_label(
                self.geocoder.as_deref(),
                &captured.point,
                self.geocode_timeout,
            )
            .await
        } else {
            captured.point.coordinate_label()
        };
        let reason = captured.justification.map(Justification::into_inner);
        let submission = PunchSubmission {
            latitude: captured.point.latitude,
            longitude: captured.point.longitude,
            location_label: location_label.clone(),
            reason: reason.clone(),
            outside_geofence: captured.verdict.is_some_and(|v| !v.within_bounds),
        };

        self.status_cache.invalidate().await;
        let recorded = match action {
            AttendanceAction::CheckIn => self.attendance.record_check_in(&submission).await,
            AttendanceAction::CheckOut => self.attendance.record_check_out(&submission).await,
        };
        let day = recorded.map_err(FlowError::SubmissionFailed)?;

        self.status_cache.store(day.clone()).await;
        if !self.refresh_schedule.is_empty() {
            spawn_status_refreshes(
                self.attendance.clone(),
                self.status_cache.clone(),
                self.refresh_schedule.clone(),
            );
        }

        Ok(FlowOutcome::Settled(SettledPunch {
            action,
            day,
            verdict: captured.verdict,
            location_label,
            reason,
            used_fallback: captured.used_fallback,
        }))
    }

    fn transition(&self, next: FlowState) {
        let previous = self.state.send_replace(next);
        if previous != next {
            tracing::debug!(from = %previous, to = %next, "attendance flow transition");
        }
    }
}
