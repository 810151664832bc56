// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas-price tiers quoted by the gas oracle
//!
//! All values are denominated in gwei and passed through exactly as the
//! oracle reports them. No unit conversion happens here.

use serde::{Deserialize, Serialize};

/// One of the three suggested inclusion speeds
///
/// # Example
/// ```
/// use gas_oracle::{GasPrices, GasTier};
///
/// let prices = GasPrices::new(10.0, 15.0, 20.0);
/// assert_eq!(prices.get(GasTier::Medium), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasTier {
    /// Safe/slow inclusion (`SafeGasPrice`)
    Low,
    /// Proposed/average inclusion (`ProposeGasPrice`)
    Medium,
    /// Fast/urgent inclusion (`FastGasPrice`)
    High,
}

impl GasTier {
    /// All tiers, slowest first
    pub const ALL: [GasTier; 3] = [GasTier::Low, GasTier::Medium, GasTier::High];

    /// Lowercase name of the tier
    pub const fn as_str(&self) -> &'static str {
        match self {
            GasTier::Low => "low",
            GasTier::Medium => "medium",
            GasTier::High => "high",
        }
    }
}

impl std::fmt::Display for GasTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current gas-price tiers in gwei
///
/// Produced only from a successful oracle response. The oracle's
/// `SafeGasPrice`, `ProposeGasPrice` and `FastGasPrice` map to `low`,
/// `medium` and `high` respectively.
///
/// # Example
/// ```
/// use gas_oracle::GasPrices;
///
/// let prices = GasPrices::new(10.0, 15.0, 20.0);
/// assert_eq!(prices.to_string(), "low: 10 gwei, medium: 15 gwei, high: 20 gwei");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasPrices {
    /// Safe/slow tier in gwei
    pub low: f64,
    /// Proposed/average tier in gwei
    pub medium: f64,
    /// Fast/urgent tier in gwei
    pub high: f64,
}

impl GasPrices {
    /// Create a set of tiers from gwei values
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Price for a single tier
    pub const fn get(&self, tier: GasTier) -> f64 {
        match tier {
            GasTier::Low => self.low,
            GasTier::Medium => self.medium,
            GasTier::High => self.high,
        }
    }

    /// Iterate over `(tier, price)` pairs, slowest first
    pub fn iter(&self) -> impl Iterator<Item = (GasTier, f64)> + '_ {
        GasTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }
}

impl std::fmt::Display for GasPrices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "low: {} gwei, medium: {} gwei, high: {} gwei",
            self.low, self.medium, self.high
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_maps_each_tier() {
        let prices = GasPrices::new(1.5, 2.5, 3.5);
        assert_eq!(prices.get(GasTier::Low), 1.5);
        assert_eq!(prices.get(GasTier::Medium), 2.5);
        assert_eq!(prices.get(GasTier::High), 3.5);
    }

    #[test]
    fn test_iter_is_slowest_first() {
        let prices = GasPrices::new(10.0, 15.0, 20.0);
        let collected: Vec<_> = prices.iter().collect();
        assert_eq!(
            collected,
            vec![
                (GasTier::Low, 10.0),
                (GasTier::Medium, 15.0),
                (GasTier::High, 20.0)
            ]
        );
    }

    #[test]
    fn test_display_keeps_fractional_gwei() {
        let prices = GasPrices::new(12.5, 13.0, 14.25);
        assert_eq!(
            prices.to_string(),
            "low: 12.5 gwei, medium: 13 gwei, high: 14.25 gwei"
        );
    }

    #[test]
    fn test_serde_shape() {
        let prices = GasPrices::new(10.0, 15.0, 20.0);
        let json = serde_json::to_value(prices).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"low": 10.0, "medium": 15.0, "high": 20.0})
        );

        let tier = serde_json::to_value(GasTier::High).unwrap();
        assert_eq!(tier, serde_json::json!("high"));
    }
}
