use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    convert::convert, front::front, health::health_check, legacy_convert::legacy_convert,
    not_found::not_found, route_unavailable::route_unavailable,
};
use axum::{
    routing::{get, post},
    Router,
};
use fxproxy_core::AppState;
use http::{header, HeaderValue};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    with_common_layers(create_routes(state))
}

/// Every route and the 404 fallback, without middleware.
pub fn create_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_api_routers())
        .merge(create_front_routers())
        .fallback(not_found)
        .with_state(state)
}

/// Body limit, security headers, request id and tracing.
pub fn with_common_layers(router: Router) -> Router {
    router
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024)) // 1MB limit
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

// both with and without the trailing slash
fn create_api_routers() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/0.1", get(route_unavailable).post(legacy_convert))
        .route("/api/0.1/", get(route_unavailable).post(legacy_convert))
        .route("/api/0.2", post(convert))
        .route("/api/0.2/", post(convert))
        .route("/api/health", get(health_check))
}

fn create_front_routers() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(front).post(front))
}
