// Scripted port implementations for flow tests.

use crate::modules::attendance_flow::core::flow_state::FlowState;
use crate::modules::attendance_flow::core::geo_point::GeoPoint;
use crate::modules::attendance_flow::ports::attendance_service::{
    AttendanceService, AttendanceServiceError, PunchSubmission,
};
use crate::modules::attendance_flow::ports::justification_prompt::{
    JustificationPrompt, JustificationReply, JustificationRequest,
};
use crate::modules::attendance_flow::ports::location::{
    LocationError, LocationProvider, PositionOptions,
};
use crate::modules::attendance_flow::ports::reverse_geocoder::{GeocodingError, ReverseGeocoder};
use crate::shared::core::attendance_day::{AttendanceAction, AttendanceDayState};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;

pub const CHECK_IN_AT: i64 = 1_700_000_000_000;
pub const CHECK_OUT_AT: i64 = 1_700_000_360_000;

/// Answers each position request with the next scripted result, then
/// `PositionUnavailable` once the script runs dry.
#[derive(Default)]
pub struct ScriptedLocationProvider {
    script: Mutex<VecDeque<Result<GeoPoint, LocationError>>>,
    seen: Mutex<Vec<PositionOptions>>,
}

impl ScriptedLocationProvider {
    pub fn new(script: Vec<Result<GeoPoint, LocationError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PositionOptions> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocationProvider {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<GeoPoint, LocationError> {
        self.seen.lock().unwrap().push(*options);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LocationError::PositionUnavailable))
    }
}

/// Never answers; the probe's own timeout has to fire.
#[derive(Default)]
pub struct HangingLocationProvider {
    calls: AtomicUsize,
}

impl HangingLocationProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for HangingLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<GeoPoint, LocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

/// Attendance service with one in-memory day. Enforces the same ordering rules
/// as the real service and counts every call.
#[derive(Default)]
pub struct InMemoryAttendanceService {
    day: Mutex<AttendanceDayState>,
    submissions: Mutex<Vec<(AttendanceAction, PunchSubmission)>>,
    status_calls: AtomicUsize,
    fail_submissions: bool,
    fail_status: bool,
}

impl InMemoryAttendanceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(day: AttendanceDayState) -> Self {
        Self {
            day: Mutex::new(day),
            ..Self::default()
        }
    }

    pub fn checked_in() -> Self {
        Self::with_day(AttendanceDayState {
            is_checked_in: true,
            check_in_time: Some(CHECK_IN_AT),
            check_out_time: None,
        })
    }

    pub fn completed() -> Self {
        Self::with_day(AttendanceDayState {
            is_checked_in: false,
            check_in_time: Some(CHECK_IN_AT),
            check_out_time: Some(CHECK_OUT_AT),
        })
    }

    pub fn failing_submissions(mut self) -> Self {
        self.fail_submissions = true;
        self
    }

    pub fn failing_status(mut self) -> Self {
        self.fail_status = true;
        self
    }

    pub fn submissions(&self) -> Vec<(AttendanceAction, PunchSubmission)> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    fn record(
        &self,
        action: AttendanceAction,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.submissions
            .lock()
            .unwrap()
            .push((action, submission.clone()));
        if self.fail_submissions {
            return Err(AttendanceServiceError::Unavailable("service offline".into()));
        }

        let mut day = self.day.lock().unwrap();
        match action {
            AttendanceAction::CheckIn if day.check_in_time.is_some() => {
                Err(AttendanceServiceError::Rejected("already checked in today".into()))
            }
            AttendanceAction::CheckIn => {
                day.is_checked_in = true;
                day.check_in_time = Some(CHECK_IN_AT);
                Ok(day.clone())
            }
            AttendanceAction::CheckOut if day.check_in_time.is_none() => {
                let reason = "cannot check out without checking in first";
                Err(AttendanceServiceError::Rejected(reason.into()))
            }
            AttendanceAction::CheckOut if day.check_out_time.is_some() => {
                Err(AttendanceServiceError::Rejected("already checked out today".into()))
            }
            AttendanceAction::CheckOut => {
                day.is_checked_in = false;
                day.check_out_time = Some(CHECK_OUT_AT);
                Ok(day.clone())
            }
        }
    }
}

#[async_trait]
impl AttendanceService for InMemoryAttendanceService {
    async fn record_check_in(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.record(AttendanceAction::CheckIn, submission)
    }

    async fn record_check_out(
        &self,
        submission: &PunchSubmission,
    ) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.record(AttendanceAction::CheckOut, submission)
    }

    async fn get_today_status(&self) -> Result<AttendanceDayState, AttendanceServiceError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_status {
            return Err(AttendanceServiceError::Unavailable("service offline".into()));
        }
        Ok(self.day.lock().unwrap().clone())
    }
}

/// Replays scripted replies and cancels once the script runs dry. When given a
/// state receiver it also records the controller state seen at each request.
#[derive(Default)]
pub struct ScriptedJustificationPrompt {
    replies: Mutex<VecDeque<JustificationReply>>,
    requests: Mutex<Vec<JustificationRequest>>,
    observed_states: Mutex<Vec<FlowState>>,
    state: Option<watch::Receiver<FlowState>>,
}

impl ScriptedJustificationPrompt {
    pub fn new(replies: Vec<JustificationReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    pub fn providing(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| JustificationReply::Provided(t.to_string()))
                .collect(),
        )
    }

    pub fn watching(mut self, state: watch::Receiver<FlowState>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn requests(&self) -> Vec<JustificationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn observed_states(&self) -> Vec<FlowState> {
        self.observed_states.lock().unwrap().clone()
    }
}

#[async_trait]
impl JustificationPrompt for ScriptedJustificationPrompt {
    async fn request(&self, request: &JustificationRequest) -> JustificationReply {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(state) = &self.state {
            self.observed_states.lock().unwrap().push(*state.borrow());
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(JustificationReply::Cancelled)
    }
}

pub struct FixedReverseGeocoder(pub &'static str);

#[async_trait]
impl ReverseGeocoder for FixedReverseGeocoder {
    async fn reverse_geocode(&self, _point: &GeoPoint) -> Result<String, GeocodingError> {
        Ok(self.0.to_string())
    }
}

pub struct FailingReverseGeocoder;

#[async_trait]
impl ReverseGeocoder for FailingReverseGeocoder {
    async fn reverse_geocode(&self, _point: &GeoPoint) -> Result<String, GeocodingError> {
        Err(GeocodingError::Status("REQUEST_DENIED".into()))
    }
}

pub struct HangingReverseGeocoder;

#[async_trait]
impl ReverseGeocoder for HangingReverseGeocoder {
    async fn reverse_geocode(&self, _point: &GeoPoint) -> Result<String, GeocodingError> {
        std::future::pending().await
    }
}
