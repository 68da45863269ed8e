mod health;
mod info;

pub use health::HealthResponse;
pub use info::{ServiceInfo, format_uptime};
