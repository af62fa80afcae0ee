use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Inbound body for both API versions.
///
/// Fields stay untyped so presence and type can be checked in a fixed order instead of
/// failing deserialization on the first surprise.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct RawConversionRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "usd")]
    pub base: Option<Value>,

    /// A single code or a list of codes.
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>, example = json!(["eur", "gbp"]))]
    pub symbol: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "10")]
    pub amount: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2017-03-01")]
    pub date: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// 0.1: fields checked one after another, plain-text errors.
    V1,
    /// 0.2: fields checked as joined futures, JSON errors.
    V2,
}

/// What gets sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionQuery {
    pub base: String,
    pub symbols: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConversion {
    pub query: ConversionQuery,
    pub amount: f64,
    /// The amount exactly as the caller sent it, echoed in the response.
    pub amount_raw: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[schema(example = "USD")]
    pub from: String,
    #[schema(example = "EUR")]
    pub to: String,
    #[schema(example = 0.9)]
    pub rate: f64,
    #[schema(example = "9.00")]
    pub rounded_result: String,
    #[schema(example = 9.0)]
    pub full_result: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    #[schema(example = "USD")]
    pub base: String,
    #[schema(value_type = String, example = "10")]
    pub amount: Value,
    pub results: Vec<ConversionResult>,
    #[schema(example = "latest")]
    pub dated: String,
}
