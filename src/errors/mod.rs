// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the gas oracle.
//!
//! Every failure of [`fetch_gas_prices`](crate::fetch_gas_prices) falls into
//! exactly one category:
//!
//! - [`GasOracleError::Configuration`] - the credential is missing, detected
//!   before any network I/O
//! - [`GasOracleError::Protocol`] - the response body broke the oracle's
//!   contract (not JSON, wrong shape, unparseable numbers)
//! - [`GasOracleError::Upstream`] - the oracle answered but reported failure
//! - [`GasOracleError::Http`] - transport failures and non-2xx statuses,
//!   passed through from `reqwest` untouched
//!
//! None of these are retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use gas_oracle::{fetch_gas_prices, EstimatorOptions, GasOracleError};
//!
//! async fn example() {
//!     let options = EstimatorOptions::new("my-api-key");
//!
//!     match fetch_gas_prices(&options).await {
//!         Ok(prices) => println!("{prices}"),
//!         Err(GasOracleError::Upstream { message, .. }) => {
//!             eprintln!("Oracle refused the request: {message}");
//!         }
//!         Err(e) => eprintln!("Other error: {e}"),
//!     }
//! }
//! ```

/// Fallback text used when the oracle reports failure without a message.
pub const UNKNOWN_UPSTREAM_ERROR: &str = "unknown error";

/// Errors that can occur while fetching gas prices.
#[derive(Debug, thiserror::Error)]
pub enum GasOracleError {
    /// The caller's options cannot produce a valid request.
    ///
    /// Raised before any network call is made.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is wrong with the options
        reason: String,
    },

    /// The response body does not match the oracle's documented shape.
    #[error("Protocol error: {reason}")]
    Protocol {
        /// What was wrong with the body
        reason: String,
        /// JSON decoding error, when decoding was what failed
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The oracle answered but reported a failure status.
    #[error("Etherscan error: {message}")]
    Upstream {
        /// The oracle's `message` field, or [`UNKNOWN_UPSTREAM_ERROR`]
        message: String,
        /// The oracle's `result` field when it carries a textual explanation
        /// (for example `"Invalid API Key"`)
        detail: Option<String>,
    },

    /// Transport failure or non-2xx HTTP status.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl GasOracleError {
    /// Create a `Configuration` error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        GasOracleError::Configuration {
            reason: reason.into(),
        }
    }

    /// Create a `Protocol` error with no underlying decoding error.
    pub fn protocol(reason: impl Into<String>) -> Self {
        GasOracleError::Protocol {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a `Protocol` error from a JSON decoding failure.
    pub fn malformed_json(source: serde_json::Error) -> Self {
        GasOracleError::Protocol {
            reason: format!("response body is not a valid gas oracle envelope: {source}"),
            source: Some(source),
        }
    }

    /// Create an `Upstream` error, substituting [`UNKNOWN_UPSTREAM_ERROR`]
    /// for a missing or blank message.
    pub fn upstream(message: Option<String>, detail: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_UPSTREAM_ERROR.to_string());
        GasOracleError::Upstream { message, detail }
    }

    /// Whether the options were rejected before any I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GasOracleError::Configuration { .. })
    }

    /// Whether the response body broke the oracle's contract.
    pub fn is_protocol(&self) -> bool {
        matches!(self, GasOracleError::Protocol { .. })
    }

    /// Whether the oracle itself reported the failure.
    pub fn is_upstream(&self) -> bool {
        matches!(self, GasOracleError::Upstream { .. })
    }

    /// Whether the failure came from the HTTP transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, GasOracleError::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_uses_message() {
        let err = GasOracleError::upstream(Some("rate limited".to_string()), None);
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "Etherscan error: rate limited");
    }

    #[test]
    fn test_upstream_falls_back_to_unknown_error() {
        let missing = GasOracleError::upstream(None, None);
        assert!(missing.to_string().contains(UNKNOWN_UPSTREAM_ERROR));

        let blank = GasOracleError::upstream(Some("  ".to_string()), None);
        assert!(blank.to_string().contains(UNKNOWN_UPSTREAM_ERROR));
    }

    #[test]
    fn test_malformed_json_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = GasOracleError::malformed_json(source);
        assert!(err.is_protocol());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_categories_are_exclusive() {
        let err = GasOracleError::configuration("missing credential");
        assert!(err.is_configuration());
        assert!(!err.is_protocol());
        assert!(!err.is_upstream());
        assert!(!err.is_transport());
    }
}
