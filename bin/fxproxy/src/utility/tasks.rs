use axum::routing::get;
use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use eyre::Report;
use fxproxy_api::app::{create_routes, with_common_layers};
use fxproxy_core::app_state::AppState;
use fxproxy_primitives::models::app_config::AppConfig;
use http::{header, HeaderName, HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Credentialed CORS. Without `CORS_ORIGINS` the request origin is echoed back.
pub fn build_cors(config: &AppConfig) -> Result<CorsLayer, Report> {
    let allow_origin = match &config.cors_origins {
        Some(origins) => {
            let allowed_origins = origins
                .iter()
                .map(|s| s.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;
            AllowOrigin::list(allowed_origins)
        }
        None => AllowOrigin::mirror_request(),
    };

    Ok(CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-http-method-override"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allow_origin(allow_origin))
}

/// Returns whether a `.env` file was found.
pub fn load_env() -> bool {
    dotenvy::dotenv().is_ok()
}

pub fn build_router(
    state: Arc<AppState>,
    config: &AppConfig,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Result<Router, Report> {
    let cors = build_cors(config)?;

    let routes = create_routes(state)
        .route("/metrics", get(move || async move { metric_handle.render() }));

    Ok(with_common_layers(routes).layer(metric_layer).layer(cors))
}
