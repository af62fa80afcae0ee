use crate::services::validation_service::ValidationService;
pub use fxproxy_primitives::{
    error::ApiError,
    models::dtos::{
        conversion_dto::{ApiVersion, ConversionResult, ConvertResponse, RawConversionRequest},
        rate_dto::RateTable,
    },
};
pub use crate::app_state::AppState;
use tracing::info;

pub struct ConversionService;

impl ConversionService {
    /// Validate, fetch once, convert.
    pub async fn convert_currency(
        state: &AppState,
        raw: RawConversionRequest,
        version: ApiVersion,
    ) -> Result<ConvertResponse, ApiError> {
        let validated = match version {
            ApiVersion::V1 => ValidationService::validate(&raw)?,
            ApiVersion::V2 => ValidationService::validate_concurrently(&raw).await?,
        };

        let table = state.fx.fetch_rates(&validated.query).await?;

        let results = Self::convert(validated.amount, &table);

        info!(
            "Converted {} {} into {} currencies ({})",
            validated.amount,
            validated.query.base,
            results.len(),
            validated.query.date
        );

        Ok(ConvertResponse {
            base: validated.query.base,
            amount: validated.amount_raw,
            results,
            dated: validated.query.date,
        })
    }

    /// One entry per rate, in the table's order.
    pub fn convert(amount: f64, table: &RateTable) -> Vec<ConversionResult> {
        table
            .rates
            .iter()
            .map(|(code, rate)| {
                let full_result = amount * rate;
                ConversionResult {
                    from: table.base.clone(),
                    to: code.clone(),
                    rate: *rate,
                    rounded_result: format!("{:.2}", full_result),
                    full_result,
                }
            })
            .collect()
    }
}
