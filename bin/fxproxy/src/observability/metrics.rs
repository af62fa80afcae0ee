use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::{PrometheusMetricLayer, PrometheusMetricLayerBuilder};

/// Prefix for every HTTP metric this service records.
pub const METRIC_PREFIX: &str = "fxproxy";

/// Installs the global Prometheus recorder; call once per process.
///
/// Scrapes of `/metrics` itself are not counted.
pub fn setup_metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    PrometheusMetricLayerBuilder::new()
        .with_prefix(METRIC_PREFIX)
        .with_ignore_patterns(&["/metrics"])
        .with_default_metrics()
        .build_pair()
}
