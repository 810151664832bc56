// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Full gas-oracle reading

use serde::{Deserialize, Serialize};

use super::gas::GasPrices;

/// Everything the gas oracle reports for the current block
///
/// [`GasPrices`] is always present. The remaining fields are optional in the
/// oracle's response and are left empty when the oracle omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasOracleReport {
    /// The three price tiers in gwei
    pub prices: GasPrices,
    /// Block the reading was taken at (`LastBlock`)
    pub last_block: Option<u64>,
    /// Suggested base fee for the next block in gwei (`suggestBaseFee`)
    pub suggested_base_fee: Option<f64>,
    /// Gas used ratio of recent blocks, oldest first (`gasUsedRatio`)
    pub gas_used_ratio: Vec<f64>,
}

impl GasOracleReport {
    /// Report carrying only the price tiers
    pub fn from_prices(prices: GasPrices) -> Self {
        Self {
            prices,
            last_block: None,
            suggested_base_fee: None,
            gas_used_ratio: Vec::new(),
        }
    }

    /// Average of [`gas_used_ratio`](Self::gas_used_ratio), if any ratios were reported
    pub fn average_gas_used_ratio(&self) -> Option<f64> {
        if self.gas_used_ratio.is_empty() {
            return None;
        }
        let sum: f64 = self.gas_used_ratio.iter().sum();
        Some(sum / self.gas_used_ratio.len() as f64)
    }
}

impl From<GasOracleReport> for GasPrices {
    fn from(report: GasOracleReport) -> Self {
        report.prices
    }
}
