// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Options for gas oracle requests
//!
//! The only recognized option is the Etherscan API key. Options are built
//! fresh for each call and are never retained by the library.
//!
//! # Example
//!
//! ```rust
//! use gas_oracle::EstimatorOptions;
//!
//! let options = EstimatorOptions::default().with_api_key("my-api-key");
//! assert_eq!(options.api_key(), Some("my-api-key"));
//! ```
//!
//! # Example: Embedding in an application config
//!
//! ```rust
//! use gas_oracle::EstimatorOptions;
//!
//! let options: EstimatorOptions = serde_json::from_str(r#"{"apiKey": "abc"}"#).unwrap();
//! assert_eq!(options.api_key(), Some("abc"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::GasOracleError;

pub mod constants;

/// Options for a single gas oracle request
///
/// `api_key` is optional at the type level but every request without one is
/// rejected with [`GasOracleError::Configuration`] before touching the network.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorOptions {
    /// Etherscan API key
    #[serde(default)]
    pub api_key: Option<String>,
}

impl EstimatorOptions {
    /// Create options carrying an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The API key, if one was supplied
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Return the API key or fail if it is missing or empty
    ///
    /// # Errors
    ///
    /// Returns [`GasOracleError::Configuration`] when no usable key is set.
    pub fn require_api_key(&self) -> Result<&str, GasOracleError> {
        match self.api_key() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GasOracleError::configuration(
                "missing credential: an Etherscan API key is required",
            )),
        }
    }
}

// Keep the credential out of logs and panic messages
impl std::fmt::Debug for EstimatorOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimatorOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
