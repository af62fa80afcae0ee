use fxproxy_core::services::validation_service::{
    normalize_amount, normalize_base, normalize_date, normalize_symbols, RawConversionRequest,
    ValidationError, ValidationService, LATEST,
};
use serde_json::{json, Value};

fn request(body: Value) -> RawConversionRequest {
    serde_json::from_value(body).expect("request body should deserialize")
}

fn valid_body() -> Value {
    json!({
        "base": "usd",
        "symbol": ["eur", "gbp"],
        "amount": "10",
        "date": "2017-03-01"
    })
}

#[test]
fn test_missing_base_reported_first_regardless_of_other_fields() {
    let bodies = vec![
        json!({}),
        json!({ "symbol": "eur", "amount": "10" }),
        json!({ "base": "", "symbol": "eur", "amount": "10", "date": "latest" }),
        json!({ "base": null, "amount": "10", "date": 42 }),
        json!({ "base": "   ", "symbol": ["eur"] }),
        json!({ "base": 12, "symbol": "eur", "amount": "10" }),
    ];

    for body in bodies {
        let raw = request(body.clone());
        assert_eq!(
            ValidationService::validate(&raw),
            Err(ValidationError::MissingBase),
            "body: {}",
            body
        );
    }
}

#[test]
fn test_errors_follow_fixed_order() {
    let raw = request(json!({ "base": "usd", "date": 5 }));
    assert_eq!(
        ValidationService::validate(&raw),
        Err(ValidationError::MissingSymbol)
    );

    let raw = request(json!({ "base": "usd", "symbol": "eur", "date": 5 }));
    assert_eq!(
        ValidationService::validate(&raw),
        Err(ValidationError::MissingAmount)
    );

    let raw = request(json!({ "base": "usd", "symbol": "eur", "amount": "abc", "date": 5 }));
    assert_eq!(
        ValidationService::validate(&raw),
        Err(ValidationError::InvalidAmount)
    );

    let raw = request(json!({ "base": "usd", "symbol": "eur", "amount": "10", "date": 5 }));
    assert_eq!(
        ValidationService::validate(&raw),
        Err(ValidationError::InvalidDateType)
    );
}

#[test]
fn test_base_is_uppercased_and_trimmed() {
    let raw = request(json!({ "base": " usd " }));
    assert_eq!(normalize_base(&raw), Ok("USD".to_string()));
}

#[test]
fn test_symbol_list_joined_in_order_and_uppercased() {
    let raw = request(json!({ "symbol": ["eur", "Gbp", "jpy"] }));
    assert_eq!(normalize_symbols(&raw), Ok("EUR,GBP,JPY".to_string()));

    let raw = request(json!({ "symbol": ["chf"] }));
    assert_eq!(normalize_symbols(&raw), Ok("CHF".to_string()));
}

#[test]
fn test_symbol_list_contains_every_code() {
    let codes = ["aud", "bgn", "brl", "cad", "chf", "cny", "czk"];
    let raw = request(json!({ "symbol": codes }));

    let symbols = normalize_symbols(&raw).unwrap();
    let parts: Vec<&str> = symbols.split(',').collect();

    assert_eq!(parts.len(), codes.len());
    for code in codes {
        assert!(parts.contains(&code.to_uppercase().as_str()));
    }
}

#[test]
fn test_single_symbol_string_is_uppercased() {
    let raw = request(json!({ "symbol": "eur" }));
    assert_eq!(normalize_symbols(&raw), Ok("EUR".to_string()));
}

#[test]
fn test_empty_or_malformed_symbols_are_missing() {
    for symbol in [json!(""), json!([]), json!(["eur", ""]), json!(["eur", 3]), json!(7)] {
        let raw = request(json!({ "symbol": symbol.clone() }));
        assert_eq!(
            normalize_symbols(&raw),
            Err(ValidationError::MissingSymbol),
            "symbol: {}",
            symbol
        );
    }
}

#[test]
fn test_amount_accepts_numbers_and_numeric_strings() {
    assert_eq!(normalize_amount(&request(json!({ "amount": "10" }))), Ok(10.0));
    assert_eq!(normalize_amount(&request(json!({ "amount": " 2.5 " }))), Ok(2.5));
    assert_eq!(normalize_amount(&request(json!({ "amount": 7 }))), Ok(7.0));
    assert_eq!(normalize_amount(&request(json!({ "amount": 0 }))), Ok(0.0));
}

#[test]
fn test_amount_missing_or_invalid() {
    assert_eq!(
        normalize_amount(&request(json!({}))),
        Err(ValidationError::MissingAmount)
    );
    assert_eq!(
        normalize_amount(&request(json!({ "amount": "" }))),
        Err(ValidationError::MissingAmount)
    );
    assert_eq!(
        normalize_amount(&request(json!({ "amount": null }))),
        Err(ValidationError::MissingAmount)
    );
    assert_eq!(
        normalize_amount(&request(json!({ "amount": "ten" }))),
        Err(ValidationError::InvalidAmount)
    );
    assert_eq!(
        normalize_amount(&request(json!({ "amount": "inf" }))),
        Err(ValidationError::InvalidAmount)
    );
    assert_eq!(
        normalize_amount(&request(json!({ "amount": true }))),
        Err(ValidationError::InvalidAmount)
    );
}

#[test]
fn test_date_defaults_to_latest() {
    assert_eq!(normalize_date(&request(json!({}))), Ok(LATEST.to_string()));
    assert_eq!(
        normalize_date(&request(json!({ "date": "" }))),
        Ok(LATEST.to_string())
    );
    assert_eq!(
        normalize_date(&request(json!({ "date": "2017-03-01" }))),
        Ok("2017-03-01".to_string())
    );
}

#[test]
fn test_non_string_date_rejected() {
    for date in [json!(20170301), json!(true), json!(["2017-03-01"]), json!({ "y": 2017 })] {
        let raw = request(json!({ "date": date.clone() }));
        assert_eq!(
            normalize_date(&raw),
            Err(ValidationError::InvalidDateType),
            "date: {}",
            date
        );
    }
}

#[test]
fn test_dot_segment_dates_rejected() {
    for date in [".", "..", " .. "] {
        let raw = request(json!({ "date": date }));
        assert_eq!(
            normalize_date(&raw),
            Err(ValidationError::InvalidDateType),
            "date: {:?}",
            date
        );
    }

    let raw = request(json!({ "date": "2017-03-01.." }));
    assert_eq!(normalize_date(&raw), Ok("2017-03-01..".to_string()));
}

#[test]
fn test_validate_builds_query_and_keeps_raw_amount() {
    let raw = request(valid_body());
    let validated = ValidationService::validate(&raw).unwrap();

    assert_eq!(validated.query.base, "USD");
    assert_eq!(validated.query.symbols, "EUR,GBP");
    assert_eq!(validated.query.date, "2017-03-01");
    assert_eq!(validated.amount, 10.0);
    assert_eq!(validated.amount_raw, json!("10"));
}

#[tokio::test]
async fn test_concurrent_validation_matches_sequential() {
    let bodies = vec![
        valid_body(),
        json!({}),
        json!({ "base": "usd" }),
        json!({ "base": "usd", "symbol": "eur" }),
        json!({ "base": "usd", "symbol": "eur", "amount": "x", "date": 1 }),
        json!({ "base": "usd", "symbol": "eur", "amount": "1", "date": 1 }),
        json!({ "symbol": "eur", "amount": "1", "date": 1 }),
    ];

    for body in bodies {
        let raw = request(body.clone());
        assert_eq!(
            ValidationService::validate_concurrently(&raw).await,
            ValidationService::validate(&raw),
            "body: {}",
            body
        );
    }
}
