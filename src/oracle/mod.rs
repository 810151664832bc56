// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas oracle requests
//!
//! Each call performs exactly one `GET` against the Etherscan gas oracle,
//! validates the response and returns typed prices. Nothing is cached or
//! retried, and no state outlives the call.
//!
//! # Example
//!
//! ```rust,no_run
//! use gas_oracle::{fetch_gas_prices, EstimatorOptions};
//!
//! # async fn example() -> Result<(), gas_oracle::GasOracleError> {
//! let prices = fetch_gas_prices(&EstimatorOptions::new("my-api-key")).await?;
//! println!("low: {} medium: {} high: {}", prices.low, prices.medium, prices.high);
//! # Ok(())
//! # }
//! ```

use reqwest::Client;
use tracing::{debug, Instrument};
use url::Url;

use crate::config::constants::{API_KEY_PARAM, ETHERSCAN_API_URL, GAS_ORACLE_QUERY};
use crate::config::EstimatorOptions;
use crate::errors::GasOracleError;
use crate::spans;
use crate::types::gas::GasPrices;
use crate::types::report::GasOracleReport;

pub mod envelope;

const REDACTED: &str = "REDACTED";

/// Fetch the current low/medium/high gas prices in gwei.
///
/// # Errors
///
/// - [`GasOracleError::Configuration`] if no API key is set (no request is made)
/// - [`GasOracleError::Http`] on transport failure or a non-2xx status
/// - [`GasOracleError::Protocol`] if the body is not a valid oracle response
/// - [`GasOracleError::Upstream`] if the oracle reports failure
pub async fn fetch_gas_prices(options: &EstimatorOptions) -> Result<GasPrices, GasOracleError> {
    fetch_gas_oracle_report(options)
        .await
        .map(|report| report.prices)
}

/// Fetch the full gas oracle reading, including block and base-fee metadata.
///
/// # Errors
///
/// Same as [`fetch_gas_prices`].
pub async fn fetch_gas_oracle_report(
    options: &EstimatorOptions,
) -> Result<GasOracleReport, GasOracleError> {
    options.require_api_key()?;
    let client = Client::builder().build()?;
    fetch_from(&client, ETHERSCAN_API_URL, options).await
}

/// Request/response cycle against an arbitrary endpoint.
pub(crate) async fn fetch_from(
    client: &Client,
    endpoint: &str,
    options: &EstimatorOptions,
) -> Result<GasOracleReport, GasOracleError> {
    let api_key = options.require_api_key()?;
    let url = gas_oracle_url(endpoint, api_key)?;
    let span = spans::fetch_gas_oracle(&redact_api_key(&url));

    async move {
        debug!("Requesting gas oracle");

        let response = client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let report = envelope::parse_gas_oracle_response(&body)?;

        debug!(
            low = report.prices.low,
            medium = report.prices.medium,
            high = report.prices.high,
            last_block = report.last_block,
            "Gas oracle responded"
        );
        Ok(report)
    }
    .instrument(span)
    .await
}

/// Build the gas oracle URL with the action selectors and the credential.
fn gas_oracle_url(endpoint: &str, api_key: &str) -> Result<Url, GasOracleError> {
    let mut url = Url::parse(endpoint).map_err(|e| {
        GasOracleError::configuration(format!("invalid gas oracle endpoint {endpoint:?}: {e}"))
    })?;
    url.query_pairs_mut()
        .extend_pairs(GAS_ORACLE_QUERY)
        .append_pair(API_KEY_PARAM, api_key);
    Ok(url)
}

/// Render a URL for logging with the credential replaced.
fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
