//! Presence/type checks and normalization of inbound conversion requests.
//!
//! Checks always report in this order: base, symbol, amount, date.

pub use fxproxy_primitives::{
    error::ValidationError,
    models::dtos::conversion_dto::{ConversionQuery, RawConversionRequest, ValidatedConversion},
};
use serde_json::Value;

/// Used when the caller gives no date.
pub const LATEST: &str = "latest";

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

pub fn normalize_base(raw: &RawConversionRequest) -> Result<String, ValidationError> {
    raw.base
        .as_ref()
        .and_then(non_blank)
        .map(str::to_uppercase)
        .ok_or(ValidationError::MissingBase)
}

/// A list keeps its order and is joined with commas.
pub fn normalize_symbols(raw: &RawConversionRequest) -> Result<String, ValidationError> {
    match raw.symbol.as_ref() {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| {
                non_blank(item)
                    .map(str::to_uppercase)
                    .ok_or(ValidationError::MissingSymbol)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|codes| codes.join(",")),
        Some(value) => non_blank(value)
            .map(str::to_uppercase)
            .ok_or(ValidationError::MissingSymbol),
        None => Err(ValidationError::MissingSymbol),
    }
}

/// Accepts a JSON number or a numeric string.
pub fn normalize_amount(raw: &RawConversionRequest) -> Result<f64, ValidationError> {
    let amount = match raw.amount.as_ref() {
        None => return Err(ValidationError::MissingAmount),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(ValidationError::MissingAmount)
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount)?,
        Some(Value::Number(n)) => n.as_f64().ok_or(ValidationError::InvalidAmount)?,
        Some(_) => return Err(ValidationError::InvalidAmount),
    };

    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

/// The date becomes a path segment upstream, so `.` and `..` are refused.
pub fn normalize_date(raw: &RawConversionRequest) -> Result<String, ValidationError> {
    match raw.date.as_ref() {
        None | Some(Value::Null) => Ok(LATEST.to_string()),
        Some(Value::String(s)) => match s.trim() {
            "" => Ok(LATEST.to_string()),
            "." | ".." => Err(ValidationError::InvalidDateType),
            date => Ok(date.to_string()),
        },
        Some(_) => Err(ValidationError::InvalidDateType),
    }
}

pub struct ValidationService;

impl ValidationService {
    /// Fail-fast, one field after another.
    pub fn validate(raw: &RawConversionRequest) -> Result<ValidatedConversion, ValidationError> {
        let base = normalize_base(raw)?;
        let symbols = normalize_symbols(raw)?;
        let amount = normalize_amount(raw)?;
        let date = normalize_date(raw)?;

        Ok(Self::assemble(raw, base, symbols, amount, date))
    }

    /// Runs each check as its own future and joins them all-or-nothing.
    ///
    /// `try_join!` polls its branches in declaration order and every branch is ready on
    /// first poll, so the error reported is the same one `validate` would report.
    pub async fn validate_concurrently(
        raw: &RawConversionRequest,
    ) -> Result<ValidatedConversion, ValidationError> {
        let (base, symbols, amount, date) = tokio::try_join!(
            async { normalize_base(raw) },
            async { normalize_symbols(raw) },
            async { normalize_amount(raw) },
            async { normalize_date(raw) },
        )?;

        Ok(Self::assemble(raw, base, symbols, amount, date))
    }

    fn assemble(
        raw: &RawConversionRequest,
        base: String,
        symbols: String,
        amount: f64,
        date: String,
    ) -> ValidatedConversion {
        ValidatedConversion {
            query: ConversionQuery {
                base,
                symbols,
                date,
            },
            amount,
            amount_raw: raw.amount.clone().unwrap_or(Value::Null),
        }
    }
}
