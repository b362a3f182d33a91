mod common;
use chrono::TimeZone;
use chrono_tz::Europe::Berlin;
use common::get_connector;
use strom::{BiddingZone, Strom};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly tracing with env-based filtering.
    // Suggested: RUST_LOG=info,strom=debug,strom_smard=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // 1. Create a connector (mock in CI when STROM_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the orchestrator and register the connector.
    let strom = Strom::builder().with_connector(connector).build()?;

    // 3. One civil week of hourly prices for Germany-Luxembourg.
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 24, 23, 59, 0).unwrap();
    println!("Fetching day-ahead prices for DE_LU...");
    let prices = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await?;

    println!("{} hourly records:", prices.len());
    for (local, value) in prices.zoned().take(6) {
        println!("  {local}  {value:8.2} EUR/MWh");
    }

    Ok(())
}
