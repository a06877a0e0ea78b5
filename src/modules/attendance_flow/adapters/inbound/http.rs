use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

/// The boundary clients evaluate punches against.
pub async fn geofence(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.geofence)
}
