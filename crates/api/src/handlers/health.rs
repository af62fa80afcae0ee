use axum::{extract::State, http::StatusCode, Json};
use fxproxy_core::AppState;
use fxproxy_primitives::models::HealthStatus;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    summary = "Health check endpoint",
    description = "Returns 200 while the service can accept requests. \
                   The exchange-rate provider is not contacted.",
    operation_id = "healthCheck",
    responses(
        (status = 200, description = "Service is healthy and operational", body = HealthStatus),
    ),
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    debug!(
        "Health check, provider at {}",
        state.config.provider_details.exchange_api_url
    );

    Json(HealthStatus {
        status: StatusCode::OK.to_string(),
        message: "API is healthy".to_string(),
    })
}
