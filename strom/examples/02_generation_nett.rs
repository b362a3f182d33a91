mod common;
use chrono::TimeZone;
use chrono_tz::Europe::Berlin;
use common::get_connector;
use strom::{Region, Strom};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();
    let strom = Strom::builder().with_connector(connector).build()?;

    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 18, 23, 59, 0).unwrap();

    // Separate generation and consumption columns per type.
    let raw = strom
        .generation_by_type(Region::Germany, start, end)
        .await?;
    println!("raw columns ({} rows):", raw.len());
    for column in raw.columns() {
        println!("  {}", column.name);
    }

    // Nett aggregation collapses storage charge/discharge pairs.
    let nett = strom
        .generation_by_type_nett(Region::Germany, start, end)
        .await?;
    println!("nett columns:");
    for column in nett.columns() {
        println!("  {}", column.name);
    }

    Ok(())
}
