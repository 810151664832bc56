// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Current Ethereum gas-price tiers from the Etherscan gas oracle.
//!
//! One call, one `GET`, one typed answer:
//!
//! ```rust,no_run
//! use gas_oracle::{fetch_gas_prices, EstimatorOptions, GasTier};
//!
//! # async fn example() -> Result<(), gas_oracle::GasOracleError> {
//! let prices = fetch_gas_prices(&EstimatorOptions::new("my-api-key")).await?;
//! println!("fast inclusion: {} gwei", prices.get(GasTier::High));
//! # Ok(())
//! # }
//! ```
//!
//! The library holds no state between calls. Failures are reported through
//! [`GasOracleError`], which separates configuration, protocol, upstream and
//! transport failures.

mod config;
mod errors;
mod oracle;
mod spans;
mod types;

pub use config::constants;
pub use config::EstimatorOptions;
pub use errors::{GasOracleError, UNKNOWN_UPSTREAM_ERROR};
pub use oracle::envelope::parse_gas_oracle_response;
pub use oracle::{fetch_gas_oracle_report, fetch_gas_prices};
pub use types::gas::{GasPrices, GasTier};
pub use types::report::GasOracleReport;
