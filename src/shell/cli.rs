//! Command line for the `geo_attendance` binary.
//!
//! Usage:
//!   geo_attendance                        # serve the attendance API
//!   geo_attendance serve                  # same
//!   geo_attendance clock check-out        # one punch from this machine

use clap::{Parser, Subcommand};

use crate::shared::core::attendance_day::AttendanceAction;

#[derive(Parser, Debug)]
#[command(
    name = "geo_attendance",
    version,
    about = "Geo-fenced attendance check-in and check-out",
    long_about = "Serves the attendance API, or records one punch from this machine.\n\n\
                  Configuration comes from the environment (a .env file is honoured)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the REST and GraphQL API with in-memory storage
    Serve,

    /// Record one punch against ATTENDANCE_API_URL
    Clock {
        /// Punch to request; today's attendance has the final say
        #[arg(value_enum, default_value_t = AttendanceAction::CheckIn)]
        action: AttendanceAction,
    },
}

impl Cli {
    /// No subcommand means serve.
    pub fn command_or_serve(&self) -> Command {
        match &self.command {
            None | Some(Command::Serve) => Command::Serve,
            Some(Command::Clock { action }) => Command::Clock { action: *action },
        }
    }
}
