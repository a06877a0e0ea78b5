// Composition root: configuration, wiring of adapters into use cases, and the
// two entry points (API server and the one-shot clock flow).

pub mod cli;
pub mod clock;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
