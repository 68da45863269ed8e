mod recover;
mod trace;

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, StatusCode},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use recover::handle_panic;
pub use trace::{HttpMakeSpan, HttpOnResponse};

pub const X_REQUEST_ID: &str = "x-request-id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wraps every route with panic recovery, the request timeout, access logging and request ids.
///
/// Panic recovery and the timeout sit inside the trace and request-id layers, so their
/// 500 and 408 responses are logged and carry `x-request-id` like any other.
pub fn apply(router: Router) -> Router {
    let request_id = HeaderName::from_static(X_REQUEST_ID);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(HttpMakeSpan)
                .on_response(HttpOnResponse::default()),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
