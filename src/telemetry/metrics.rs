use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("service-templates"));

pub static HTTP_METRICS: LazyLock<HttpMetrics> = LazyLock::new(|| HttpMetrics::new(&METER));

/// Instruments recorded once per finished request.
#[derive(Clone)]
pub struct HttpMetrics {
    pub requests_total: Counter<u64>,
    pub request_duration: Histogram<f64>,
}

impl HttpMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            requests_total: meter
                .u64_counter("http.requests.total")
                .with_description("Total number of HTTP requests")
                .with_unit("{request}")
                .build(),
            request_duration: meter
                .f64_histogram("http.request.duration")
                .with_description("HTTP request duration in milliseconds")
                .with_unit("ms")
                .with_boundaries(vec![
                    1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0,
                    10000.0,
                ])
                .build(),
        }
    }
}
