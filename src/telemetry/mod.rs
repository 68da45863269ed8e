mod init;
mod metrics;

pub use init::{TelemetryGuard, init_telemetry};
pub use metrics::{HTTP_METRICS, HttpMetrics, METER};
