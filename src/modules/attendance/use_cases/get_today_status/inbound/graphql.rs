use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::stream::current_work_date;
use crate::modules::attendance_flow::core::geofence::GeofenceConfig;
use crate::shared::core::attendance_day::AttendanceDayState;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlAttendanceDay {
    pub is_checked_in: bool,
    pub check_in_time: Option<i64>,
    pub check_out_time: Option<i64>,
}

impl From<AttendanceDayState> for GqlAttendanceDay {
    fn from(day: AttendanceDayState) -> Self {
        Self {
            is_checked_in: day.is_checked_in,
            check_in_time: day.check_in_time,
            check_out_time: day.check_out_time,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlGeofence {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub radius_meters: f64,
    pub enabled: bool,
    pub required: bool,
}

impl From<GeofenceConfig> for GqlGeofence {
    fn from(config: GeofenceConfig) -> Self {
        Self {
            center_latitude: config.center_latitude,
            center_longitude: config.center_longitude,
            radius_meters: config.radius_meters,
            enabled: config.enabled,
            required: config.required,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn today_status(
        &self,
        context: &Context<'_>,
        employee_id: String,
    ) -> GqlResult<GqlAttendanceDay> {
        let state = context.data_unchecked::<AppState>();
        let day = state
            .status_handler
            .handle(&employee_id, current_work_date())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(day.into())
    }

    async fn geofence(&self, context: &Context<'_>) -> GqlGeofence {
        context.data_unchecked::<AppState>().geofence.into()
    }
}
