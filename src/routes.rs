use axum::{Router, routing::get};

use crate::{AppState, handlers};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/info", get(handlers::service_info))
        .route("/", get(handlers::greeting))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HealthResponse, ServiceInfo};
    use crate::profile::{BACKEND_SERVICE, SERVICE_TEMPLATE_1};
    use axum::body::{Body, Bytes};
    use axum::http::{HeaderMap, Request, StatusCode, header::CONTENT_TYPE};
    use std::time::{Duration, Instant};
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};
    use tower::ServiceExt;

    async fn send(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body)
    }

    fn content_type(headers: &HeaderMap) -> &str {
        headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(AppState::new(&SERVICE_TEMPLATE_1));

        let (status, headers, body) = send(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type(&headers), "application/json");

        let response: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.status, "ok");
        assert!(!response.timestamp.is_empty());
        assert!(OffsetDateTime::parse(&response.timestamp, &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn health_response_structure_depends_on_profile() {
        let (_, _, body) = send(create_router(AppState::new(&SERVICE_TEMPLATE_1)), "/health").await;
        let untagged: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(untagged.get("status").is_some());
        assert!(untagged.get("timestamp").is_some());
        assert!(untagged.get("service").is_none());

        let (_, _, body) = send(create_router(AppState::new(&BACKEND_SERVICE)), "/health").await;
        let tagged: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(tagged["service"], "backend");
    }

    #[tokio::test]
    async fn health_endpoint_multiple_requests() {
        let app = create_router(AppState::new(&BACKEND_SERVICE));
        let mut previous: Option<OffsetDateTime> = None;

        for i in 0..3 {
            let (status, _, body) = send(app.clone(), "/health").await;
            assert_eq!(status, StatusCode::OK, "request {}", i + 1);

            let response: HealthResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(response.status, "ok", "request {}", i + 1);

            let timestamp = OffsetDateTime::parse(&response.timestamp, &Rfc3339).unwrap();
            if let Some(previous) = previous {
                assert!(timestamp >= previous, "request {}", i + 1);
            }
            previous = Some(timestamp);
        }
    }

    #[tokio::test]
    async fn info_endpoint_reports_identity() {
        let app = create_router(AppState::new(&BACKEND_SERVICE));

        let (status, headers, body) = send(app, "/info").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type(&headers), "application/json");

        let info: ServiceInfo = serde_json::from_slice(&body).unwrap();
        assert_eq!(info.name, "backend-service");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.uptime, "0s");
    }

    #[tokio::test]
    async fn info_uptime_grows_with_process_age() {
        let mut state = AppState::new(&BACKEND_SERVICE);
        state.started_at = Instant::now()
            .checked_sub(Duration::from_secs(65))
            .expect("monotonic clock is older than a minute");

        let (_, _, body) = send(create_router(state), "/info").await;
        let info: ServiceInfo = serde_json::from_slice(&body).unwrap();

        assert_eq!(info.uptime, "1m5s");
    }

    #[tokio::test]
    async fn info_uptime_increases_after_delay() {
        let app = create_router(AppState::new(&BACKEND_SERVICE));

        let (_, _, body) = send(app.clone(), "/info").await;
        let first: ServiceInfo = serde_json::from_slice(&body).unwrap();

        tokio::time::sleep(Duration::from_millis(1600)).await;

        let (_, _, body) = send(app, "/info").await;
        let second: ServiceInfo = serde_json::from_slice(&body).unwrap();

        assert_eq!(first.uptime, "0s");
        assert_ne!(second.uptime, "0s");
        assert!(!second.uptime.is_empty());
    }

    #[tokio::test]
    async fn info_is_not_found_without_identity() {
        let app = create_router(AppState::new(&SERVICE_TEMPLATE_1));

        let (status, headers, body) = send(app, "/info").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type(&headers), "application/json");

        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Service Template 1 has no info endpoint");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn root_endpoint_returns_greeting() {
        for profile in [&SERVICE_TEMPLATE_1, &BACKEND_SERVICE] {
            let app = create_router(AppState::new(profile));

            let (status, headers, body) = send(app, "/").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type(&headers), "text/plain; charset=utf-8");
            assert_eq!(body, profile.greeting.as_bytes());
        }
    }

    #[tokio::test]
    async fn unknown_path_falls_through_to_not_found() {
        let app = create_router(AppState::new(&BACKEND_SERVICE));

        let (status, _, body) = send(app, "/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }
}
