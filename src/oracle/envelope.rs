// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding of the Etherscan gas oracle response
//!
//! The body is decoded in two steps. First into [`GasOracleEnvelope`], which
//! only checks the top-level shape and keeps `result` untyped, because
//! Etherscan puts an error string there on failure. Then, once the status
//! says success, `result` is decoded into [`GasOracleResult`] and projected
//! into a [`GasOracleReport`].
//!
//! Numeric fields arrive as strings. Any that fail to parse as a finite
//! decimal are rejected as protocol errors rather than becoming NaN.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::config::constants::STATUS_OK;
use crate::errors::GasOracleError;
use crate::spans;
use crate::types::gas::GasPrices;
use crate::types::report::GasOracleReport;

/// Top-level response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GasOracleEnvelope {
    /// `"1"` on success, `"0"` on failure
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
}

/// The `result` object of a successful response
#[derive(Debug, Deserialize)]
pub(crate) struct GasOracleResult {
    #[serde(rename = "SafeGasPrice")]
    pub safe_gas_price: String,
    #[serde(rename = "ProposeGasPrice")]
    pub propose_gas_price: String,
    #[serde(rename = "FastGasPrice")]
    pub fast_gas_price: String,
    #[serde(rename = "LastBlock", default)]
    pub last_block: Option<String>,
    #[serde(rename = "suggestBaseFee", default)]
    pub suggest_base_fee: Option<String>,
    #[serde(rename = "gasUsedRatio", default)]
    pub gas_used_ratio: Option<String>,
}

/// Decode a raw gas oracle response body into a report.
///
/// Useful when the body was fetched by other means (a proxy, a recorded
/// fixture). [`fetch_gas_oracle_report`](crate::fetch_gas_oracle_report)
/// uses the same decoding.
///
/// # Errors
///
/// - [`GasOracleError::Protocol`] if the body is not a JSON envelope, the
///   result object has the wrong shape, or a numeric field does not parse
/// - [`GasOracleError::Upstream`] if the status is not success or the result
///   is absent
pub fn parse_gas_oracle_response(body: &str) -> Result<GasOracleReport, GasOracleError> {
    let span = spans::parse_gas_oracle_response(body.len());
    let _guard = span.enter();

    let envelope: GasOracleEnvelope = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Gas oracle returned a malformed body");
        GasOracleError::malformed_json(e)
    })?;

    envelope.into_report()
}

impl GasOracleEnvelope {
    /// Validate the status and project the result.
    pub(crate) fn into_report(self) -> Result<GasOracleReport, GasOracleError> {
        let result = match self.result {
            Some(result) if self.status == STATUS_OK && !is_absent(&result) => result,
            result => {
                let detail = result
                    .as_ref()
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_owned);
                warn!(
                    status = %self.status,
                    upstream_message = self.message.as_deref().unwrap_or_default(),
                    detail = detail.as_deref().unwrap_or_default(),
                    "Gas oracle reported failure"
                );
                return Err(GasOracleError::upstream(self.message, detail));
            }
        };

        let result: GasOracleResult =
            serde_json::from_value(result).map_err(|e| GasOracleError::Protocol {
                reason: format!("gas oracle result has an unexpected shape: {e}"),
                source: Some(e),
            })?;

        result.into_report()
    }
}

impl GasOracleResult {
    /// Convert the string-encoded fields into typed values.
    pub(crate) fn into_report(self) -> Result<GasOracleReport, GasOracleError> {
        let prices = GasPrices {
            low: parse_decimal("SafeGasPrice", &self.safe_gas_price)?,
            medium: parse_decimal("ProposeGasPrice", &self.propose_gas_price)?,
            high: parse_decimal("FastGasPrice", &self.fast_gas_price)?,
        };

        let last_block = self
            .last_block
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    GasOracleError::protocol(format!("LastBlock is not a block number: {raw:?}"))
                })
            })
            .transpose()?;

        let suggested_base_fee = self
            .suggest_base_fee
            .as_deref()
            .map(|raw| parse_decimal("suggestBaseFee", raw))
            .transpose()?;

        let gas_used_ratio = match self.gas_used_ratio.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| parse_decimal("gasUsedRatio", part))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(GasOracleReport {
            prices,
            last_block,
            suggested_base_fee,
            gas_used_ratio,
        })
    }
}

/// Null and empty-string results count as "no result".
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Parse a string-encoded decimal, rejecting NaN and infinities.
fn parse_decimal(field: &str, raw: &str) -> Result<f64, GasOracleError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            GasOracleError::protocol(format!("{field} is not a decimal number: {raw:?}"))
        })
}
