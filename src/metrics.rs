//! Prometheus metrics for the HTTP service.
//!
//! Three custom collectors are registered: a request counter and a
//! request-duration histogram, both labeled by method/route/status code,
//! and a gauge holding the current student row count. The gauge is
//! refreshed from the repository on each scrape of `/metrics`. On Linux
//! the standard process collector (CPU, memory, fds) is registered too.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

/// Registry plus the service's custom collectors.
pub struct Metrics {
    registry: Registry,
    http_request_duration: HistogramVec,
    http_requests_total: IntCounterVec,
    students_total: IntGauge,
}

impl Metrics {
    /// Build the registry and register all collectors.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            ),
            &["method", "route", "status_code"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "route", "status_code"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let students_total = IntGauge::new(
            "students_total",
            "Total number of students in the database",
        )?;
        registry.register(Box::new(students_total.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            http_request_duration,
            http_requests_total,
            students_total,
        })
    }

    /// Record one completed request.
    pub fn observe_request(&self, method: &str, route: &str, status: u16, seconds: f64) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];
        self.http_request_duration
            .with_label_values(&labels)
            .observe(seconds);
        self.http_requests_total.with_label_values(&labels).inc();
    }

    /// Refresh the student row count gauge.
    pub fn set_students_total(&self, count: i64) {
        self.students_total.set(count);
    }

    /// Encode the current state of every collector in the Prometheus
    /// text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
