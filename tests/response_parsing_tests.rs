// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for decoding recorded gas oracle responses through the public API
//!
//! These bodies mirror what Etherscan returns for success, rate limiting and
//! bad credentials, so the error classification callers branch on is pinned.

use gas_oracle::{
    fetch_gas_oracle_report, fetch_gas_prices, parse_gas_oracle_response, EstimatorOptions,
    GasOracleError, GasPrices, GasTier, UNKNOWN_UPSTREAM_ERROR,
};

#[test]
fn test_success_body_maps_safe_proposed_fast() {
    let body = r#"{"status":"1","result":{"SafeGasPrice":"10","ProposeGasPrice":"15","FastGasPrice":"20"}}"#;

    let report = parse_gas_oracle_response(body).unwrap();

    assert_eq!(report.prices, GasPrices::new(10.0, 15.0, 20.0));
    assert_eq!(report.prices.get(GasTier::Low), 10.0);
    assert_eq!(report.prices.get(GasTier::Medium), 15.0);
    assert_eq!(report.prices.get(GasTier::High), 20.0);
}

#[test]
fn test_string_decimal_is_coerced() {
    let body = r#"{"status":"1","result":{"SafeGasPrice":"12.5","ProposeGasPrice":"15","FastGasPrice":"20"}}"#;

    let prices = GasPrices::from(parse_gas_oracle_response(body).unwrap());

    assert_eq!(prices.low, 12.5);
}

#[test]
fn test_rate_limited_body() {
    let body = r#"{"status":"0","message":"rate limited"}"#;

    let err = parse_gas_oracle_response(body).unwrap_err();

    assert!(err.is_upstream());
    assert!(err.to_string().contains("rate limited"));
}

#[test]
fn test_failure_body_without_message() {
    let err = parse_gas_oracle_response(r#"{"status":"0"}"#).unwrap_err();

    assert!(err.is_upstream());
    assert!(err.to_string().contains(UNKNOWN_UPSTREAM_ERROR));
}

#[test]
fn test_invalid_api_key_body() {
    let body = r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#;

    match parse_gas_oracle_response(body) {
        Err(GasOracleError::Upstream { message, detail }) => {
            assert_eq!(message, "NOTOK");
            assert_eq!(detail.as_deref(), Some("Invalid API Key"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn test_not_json_is_protocol_error() {
    let err = parse_gas_oracle_response("Max rate limit reached").unwrap_err();

    assert!(err.is_protocol());
    assert!(!err.is_upstream());
}

#[test]
fn test_non_numeric_price_is_protocol_error() {
    let body = r#"{"status":"1","result":{"SafeGasPrice":"ten","ProposeGasPrice":"15","FastGasPrice":"20"}}"#;

    let err = parse_gas_oracle_response(body).unwrap_err();

    assert!(err.is_protocol());
}

#[tokio::test]
async fn test_fetch_without_api_key_fails_fast() {
    let err = fetch_gas_prices(&EstimatorOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_configuration());

    let err = fetch_gas_oracle_report(&EstimatorOptions::new(""))
        .await
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("missing credential"));
}
