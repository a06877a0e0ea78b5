use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::stream::current_work_date;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TodayStatusParams {
    pub employee_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TodayStatusParams>,
) -> impl IntoResponse {
    let today = current_work_date();
    match state
        .status_handler
        .handle(&params.employee_id, today)
        .await
    {
        Ok(day) => Json(day).into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                employee_id = %params.employee_id,
                "failed to read today's attendance"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
