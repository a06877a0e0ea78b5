use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::attendance::use_cases::get_today_status::inbound::http as status_http;
use crate::modules::attendance::use_cases::record_attendance::inbound::http as record_http;
use crate::modules::attendance_flow::adapters::inbound::http as geofence_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/check-in", post(record_http::check_in))
        .route("/attendance/check-out", post(record_http::check_out))
        .route("/attendance/today", get(status_http::handle))
        .route("/attendance/geofence", get(geofence_http::geofence))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with request tracing.
pub fn app(state: AppState) -> Router {
    router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
