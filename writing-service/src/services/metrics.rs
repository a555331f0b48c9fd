//! Metrics for writing-service.
//!
//! HTTP request metrics come from the shared middleware through the
//! `metrics` recorder; provider calls are tracked in a Prometheus registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static PROVIDER_CALLS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();

/// Initialize metrics collection. Call once at startup.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("metrics handle already initialized"))?;

    let registry = Registry::new();

    let provider_calls = IntCounterVec::new(
        Opts::new(
            "writing_provider_calls_total",
            "Total language-model calls by task and outcome",
        ),
        &["task", "status"],
    )?;

    let provider_latency = HistogramVec::new(
        HistogramOpts::new(
            "writing_provider_latency_seconds",
            "Language-model call latency in seconds",
        )
        .buckets(vec![0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 30.0, 60.0, 120.0]),
        &["task"],
    )?;

    registry.register(Box::new(provider_calls.clone()))?;
    registry.register(Box::new(provider_latency.clone()))?;

    PROMETHEUS_REGISTRY
        .set(registry)
        .map_err(|_| anyhow::anyhow!("prometheus registry already initialized"))?;
    PROVIDER_CALLS_TOTAL
        .set(provider_calls)
        .map_err(|_| anyhow::anyhow!("writing_provider_calls_total already initialized"))?;
    PROVIDER_LATENCY_SECONDS
        .set(provider_latency)
        .map_err(|_| anyhow::anyhow!("writing_provider_latency_seconds already initialized"))?;

    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        let encoder = TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record the outcome of one provider call.
pub fn record_provider_call(task: &str, status: &str) {
    if let Some(counter) = PROVIDER_CALLS_TOTAL.get() {
        counter.with_label_values(&[task, status]).inc();
    }
}

pub fn observe_provider_latency(task: &str, seconds: f64) {
    if let Some(histogram) = PROVIDER_LATENCY_SECONDS.get() {
        histogram.with_label_values(&[task]).observe(seconds);
    }
}
