/// Example printing the current Ethereum gas-price tiers
///
/// This example shows how to:
/// 1. Build `EstimatorOptions` from an API key
/// 2. Fetch the full gas oracle report
/// 3. Branch on the error category when the request fails
///
/// Run with:
/// ```bash
/// ETHERSCAN_API_KEY=your_api_key \
/// cargo run --package gas-oracle --example current_gas_prices
/// ```
use anyhow::{Context, Result};
use gas_oracle::{fetch_gas_oracle_report, EstimatorOptions, GasOracleError};
use std::env;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    dotenvy::dotenv().ok();

    let api_key = env::var("ETHERSCAN_API_KEY")
        .context("ETHERSCAN_API_KEY environment variable not set")?;
    let options = EstimatorOptions::new(api_key);

    let report = match fetch_gas_oracle_report(&options).await {
        Ok(report) => report,
        Err(GasOracleError::Upstream { message, detail }) => {
            warn!(
                upstream_message = %message,
                detail = detail.as_deref().unwrap_or("-"),
                "Etherscan refused the request"
            );
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to fetch gas prices"),
    };

    info!(last_block = report.last_block, "Fetched gas oracle report");

    println!("\n=== Current Gas Prices ===");
    for (tier, price) in report.prices.iter() {
        println!("{tier:>6}: {price} gwei");
    }
    if let Some(base_fee) = report.suggested_base_fee {
        println!("base fee suggestion: {base_fee} gwei");
    }
    if let Some(ratio) = report.average_gas_used_ratio() {
        println!("average gas used ratio: {ratio:.2}");
    }

    Ok(())
}
