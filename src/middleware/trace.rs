use std::time::Duration;

use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use opentelemetry::KeyValue;
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

use super::X_REQUEST_ID;
use crate::telemetry::{HTTP_METRICS, HttpMetrics};

/// Opens the per-request span, named after the matched route when there is one.
#[derive(Clone)]
pub struct HttpMakeSpan;

impl<B> MakeSpan<B> for HttpMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let method = request.method().as_str();
        let uri = request.uri();
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or_else(|| uri.path());

        tracing::info_span!(
            "HTTP request",
            otel.name = %format!("{method} {route}"),
            http.method = %method,
            http.route = %route,
            http.target = %uri,
            http.flavor = ?request.version(),
            http.user_agent = header_str(request, "user-agent"),
            http.request_id = header_str(request, X_REQUEST_ID),
            http.response.status_code = tracing::field::Empty,
            otel.status_code = tracing::field::Empty,
        )
    }
}

fn header_str<'a, B>(request: &'a Request<B>, name: &str) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Records status and latency on the request span, in the HTTP metrics, and as a log line.
#[derive(Clone)]
pub struct HttpOnResponse {
    metrics: HttpMetrics,
}

impl HttpOnResponse {
    pub fn new(metrics: HttpMetrics) -> Self {
        Self { metrics }
    }
}

impl Default for HttpOnResponse {
    fn default() -> Self {
        Self::new(HTTP_METRICS.clone())
    }
}

impl<B> OnResponse<B> for HttpOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();

        span.record("http.response.status_code", status as i64);
        span.record("otel.status_code", if status >= 500 { "ERROR" } else { "OK" });

        let latency_ms = latency.as_secs_f64() * 1000.0;
        let attributes = [
            KeyValue::new("http.status_code", status.to_string()),
            KeyValue::new("http.status_class", format!("{}xx", status / 100)),
        ];

        self.metrics.requests_total.add(1, &attributes);
        self.metrics.request_duration.record(latency_ms, &attributes);

        tracing::info!(
            http.response.status_code = status,
            latency_ms = latency_ms,
            "finished processing request"
        );
    }
}
