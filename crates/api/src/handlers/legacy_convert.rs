use crate::extractors::ConversionBody;
use axum::{extract::State, Json};
use fxproxy_core::services::conversion_service::{AppState, ConversionService};
use fxproxy_primitives::error::LegacyApiError;
use fxproxy_primitives::models::{ApiVersion, ConvertResponse, RawConversionRequest};
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/0.1/",
    tag = "Conversion",
    summary = "Convert an amount (legacy 0.1 API)",
    description = "Same contract as 0.2, but fields are checked one at a time and errors are \
                   returned as plain text.",
    request_body = RawConversionRequest,
    responses(
        (status = 200, description = "Conversion successful", body = ConvertResponse),
        (status = 401, description = "Provider rejected our credentials", body = String),
        (status = 403, description = "Missing or invalid request field", body = String),
        (status = 500, description = "Unknown provider status code", body = String),
        (status = 502, description = "Provider error", body = String),
    ),
)]
pub async fn legacy_convert(
    State(state): State<Arc<AppState>>,
    ConversionBody(req): ConversionBody,
) -> Result<Json<ConvertResponse>, LegacyApiError> {
    let response = ConversionService::convert_currency(&state, req, ApiVersion::V1)
        .await
        .inspect_err(|e| info!("Conversion (0.1) rejected: {}", e))?;

    Ok(Json(response))
}
