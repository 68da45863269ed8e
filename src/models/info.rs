use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::profile::InfoIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub uptime: String,
}

impl ServiceInfo {
    pub fn new(identity: InfoIdentity, uptime: Duration) -> Self {
        Self {
            name: identity.name.to_string(),
            version: identity.version.to_string(),
            uptime: format_uptime(uptime),
        }
    }
}

/// Renders a duration rounded to the nearest second, e.g. `0s`, `3m7s`, `2h0m5s`.
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs() + u64::from(elapsed.subsec_nanos() >= 500_000_000);

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
