use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::attendance::core::stream::work_date_of;
use crate::modules::attendance::use_cases::get_today_status::inbound::graphql::GqlAttendanceDay;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::shared::core::attendance_day::AttendanceAction;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct PunchInput {
    pub employee_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_label: String,
    pub reason: Option<String>,
    #[graphql(default)]
    pub outside_geofence: bool,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn check_in(
        &self,
        context: &Context<'_>,
        input: PunchInput,
    ) -> GqlResult<GqlAttendanceDay> {
        record(context, AttendanceAction::CheckIn, input).await
    }

    async fn check_out(
        &self,
        context: &Context<'_>,
        input: PunchInput,
    ) -> GqlResult<GqlAttendanceDay> {
        record(context, AttendanceAction::CheckOut, input).await
    }
}

async fn record(
    context: &Context<'_>,
    action: AttendanceAction,
    input: PunchInput,
) -> GqlResult<GqlAttendanceDay> {
    let state = context.data_unchecked::<AppState>();
    let now = Utc::now();

    let command = RecordAttendance {
        attendance_id: Uuid::now_v7().to_string(),
        employee_id: input.employee_id,
        work_date: work_date_of(now),
        action,
        occurred_at: now.timestamp_millis(),
        latitude: input.latitude,
        longitude: input.longitude,
        location_label: input.location_label,
        reason: input.reason,
        outside_geofence: input.outside_geofence,
    };

    let day = state
        .record_handler
        .handle(command)
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
    Ok(day.into())
}
