use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthResponse {
    /// A liveness report stamped with `now`, rendered in UTC at whole-second precision.
    pub fn at(now: OffsetDateTime, service: Option<&str>) -> Result<Self, time::error::Format> {
        let now = now.to_offset(UtcOffset::UTC);
        let now = now - Duration::nanoseconds(i64::from(now.nanosecond()));

        Ok(Self {
            status: "ok".to_string(),
            timestamp: now.format(&Rfc3339)?,
            service: service.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_is_utc_whole_seconds() {
        let response = HealthResponse::at(datetime!(2024-01-15 10:30:00.987 UTC), None).unwrap();

        assert_eq!(response.status, "ok");
        assert_eq!(response.timestamp, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let response =
            HealthResponse::at(datetime!(2024-01-15 12:30:05 +02:00), Some("backend")).unwrap();

        assert_eq!(response.timestamp, "2024-01-15T10:30:05Z");
        assert_eq!(response.service.as_deref(), Some("backend"));
    }

    #[test]
    fn test_untagged_serialization_omits_service() {
        let response = HealthResponse::at(datetime!(2024-01-15 10:30:00 UTC), None).unwrap();
        let json = serde_json::to_string(&response).expect("serialization should succeed");

        assert_eq!(json, r#"{"status":"ok","timestamp":"2024-01-15T10:30:00Z"}"#);
    }

    #[test]
    fn test_tagged_serialization_appends_service() {
        let response =
            HealthResponse::at(datetime!(2024-01-15 10:30:00 UTC), Some("backend")).unwrap();
        let json = serde_json::to_string(&response).expect("serialization should succeed");

        assert_eq!(
            json,
            r#"{"status":"ok","timestamp":"2024-01-15T10:30:00Z","service":"backend"}"#
        );
    }
}
