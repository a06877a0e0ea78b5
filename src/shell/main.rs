use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use geo_attendance::shell::cli::{Cli, Command};
use geo_attendance::shell::clock;
use geo_attendance::shell::config::AppConfig;
use geo_attendance::shell::http::app;
use geo_attendance::shell::state::{AppState, AttendanceEventStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    match cli.command_or_serve() {
        Command::Serve => serve(&config).await,
        Command::Clock { action } => clock::run(&config, action).await,
    }
}

async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    // In-memory storage for now
    let event_store = Arc::new(AttendanceEventStore::new());
    let state = AppState::in_memory(event_store, config.geofence);

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Attendance API: http://{}/attendance, GraphQL: http://{}/gql", addr, addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
