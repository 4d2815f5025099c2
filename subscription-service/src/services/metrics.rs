//! Metrics module for subscription-service.
//! Provides Prometheus metrics for schedule requests, plus the recorder behind the
//! shared HTTP middleware's `metrics` facade.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use prometheus::{
    histogram_opts, opts, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec,
    IntCounterVec, TextEncoder,
};
use std::sync::OnceLock;

/// Recorder for `http_requests_total` and `http_request_duration_seconds`.
/// `None` when another recorder was installed first.
static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Schedule requests by subscription type and outcome
pub static SCHEDULE_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Invoice dates emitted per scheduled request. Weekly schedules produce four or
/// five dates per month of window, so the buckets reach a one-year window.
pub static INVOICE_DATES_GENERATED: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        histogram_opts!(
            "subscription_invoice_dates_generated",
            "Invoice dates generated per scheduled request",
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 13.0, 26.0, 53.0]
        ),
        &["subscription_type"]
    )
    .expect("Failed to register INVOICE_DATES_GENERATED")
});

/// Error counter for alerting
pub static ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics and install the HTTP recorder. Safe to call more than once.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Prometheus recorder not installed");
            None
        }
    });

    SCHEDULE_REQUESTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "subscription_schedule_requests_total",
                "Total schedule requests by subscription type and outcome"
            ),
            &["subscription_type", "outcome"]
        )
        .expect("Failed to register SCHEDULE_REQUESTS_TOTAL")
    });

    let _ = &*INVOICE_DATES_GENERATED;

    ERRORS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("subscription_errors_total", "Total errors by type for alerting"),
            &["error_type"]
        )
        .expect("Failed to register ERRORS_TOTAL")
    });
}

/// Get metrics in Prometheus text format: the HTTP recorder first, then the
/// schedule registry.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .and_then(Option::as_ref)
        .map(PrometheusHandle::render)
        .unwrap_or_default();

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return output;
    }
    output.push_str(&String::from_utf8(buffer).unwrap_or_default());
    output
}

/// Record a schedule request.
pub fn record_schedule_request(subscription_type: &str, outcome: &str) {
    if let Some(counter) = SCHEDULE_REQUESTS_TOTAL.get() {
        counter
            .with_label_values(&[subscription_type, outcome])
            .inc();
    }
}

/// Record how many invoice dates a request produced.
pub fn record_invoice_dates(subscription_type: &str, count: usize) {
    INVOICE_DATES_GENERATED
        .with_label_values(&[subscription_type])
        .observe(count as f64);
}

/// Record an error for alerting.
pub fn record_error(error_type: &str) {
    if let Some(counter) = ERRORS_TOTAL.get() {
        counter.with_label_values(&[error_type]).inc();
    }
}
