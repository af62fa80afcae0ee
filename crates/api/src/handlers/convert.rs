use crate::extractors::ConversionBody;
use axum::{extract::State, Json};
use fxproxy_core::services::conversion_service::{ApiError, AppState, ConversionService};
use fxproxy_primitives::error::ApiErrorResponse;
use fxproxy_primitives::models::{ApiVersion, ConvertResponse, RawConversionRequest};
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/0.2/",
    tag = "Conversion",
    summary = "Convert an amount into one or more currencies",
    description = "Validates the request, fetches rates for `base` from the exchange-rate provider \
                   and returns one result per requested symbol. \
                   The body may be JSON or urlencoded form fields. \
                   Validation failures are reported as 403 with a JSON error body.",
    request_body = RawConversionRequest,
    responses(
        (status = 200, description = "Conversion successful", body = ConvertResponse),
        (status = 401, description = "Provider rejected our credentials", body = ApiErrorResponse),
        (status = 403, description = "Missing or invalid request field", body = ApiErrorResponse),
        (status = 500, description = "Unknown provider status code", body = ApiErrorResponse),
        (status = 502, description = "Provider error", body = ApiErrorResponse),
    ),
)]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    ConversionBody(req): ConversionBody,
) -> Result<Json<ConvertResponse>, ApiError> {
    let response = ConversionService::convert_currency(&state, req, ApiVersion::V2)
        .await
        .inspect_err(|e| info!("Conversion (0.2) rejected: {}", e))?;

    Ok(Json(response))
}
