/// Example demonstrating unit conversion for wallet balances and transactions
///
/// This example shows how to:
/// 1. Ingest a hex balance as a provider would return it
/// 2. Render it in ether and truncate it for display
/// 3. Parse user input into wei, with both precision policies
/// 4. Convert a gas price quoted in gwei
///
/// Run with:
/// ```bash
/// RUST_LOG=debug cargo run --example unit_conversion
/// ```
///
/// Debug logging shows the fractional digits dropped by truncation.
use anyhow::{Context, Result};
use token_units::{
    gas_price_to_base, normalize, ConverterConfig, Decimals, UnitConverter,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let converter = UnitConverter::default();

    // Balance as returned by eth_getBalance
    let balance = normalize("0x1bc16d674ec80000").context("Invalid balance")?;
    let ether = converter.from_wei(balance, "ether")?;
    let shown = converter.display_wei(balance, "ether")?;
    info!(%balance, %ether, %shown, "Wallet balance");

    // User typed more decimals than a 6-decimal token supports
    let usdc = Decimals::new(6);
    let lenient = converter.to_token_base("12.3456789", usdc)?;
    info!(%lenient, "Truncated token amount");

    let strict = UnitConverter::with_config(ConverterConfig::strict());
    match strict.to_token_base("12.3456789", usdc) {
        Ok(amount) => info!(%amount, "Strict token amount"),
        Err(e) => info!(error = %e, "Strict conversion rejected input"),
    }

    // Gas price from a UI field in gwei
    let gas_price = gas_price_to_base("31.5")?;
    info!(%gas_price, "Gas price in wei");

    Ok(())
}
