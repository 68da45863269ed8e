pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod profile;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use config::Config;
pub use profile::ServiceProfile;

use std::time::Instant;

/// Router state shared by every handler. Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub profile: &'static ServiceProfile,
    pub started_at: Instant,
}

impl AppState {
    /// Captures the process-start instant used for uptime reporting.
    pub fn new(profile: &'static ServiceProfile) -> Self {
        Self {
            profile,
            started_at: Instant::now(),
        }
    }
}
