mod common;
use chrono::TimeZone;
use chrono_tz::Europe::Dublin;
use common::get_flows_connector;
use strom::{Border, Strom};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_flows_connector();
    let strom = Strom::builder().with_connector(connector).build()?;

    let start = Dublin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Dublin.with_ymd_and_hms(2023, 9, 18, 23, 59, 0).unwrap();

    let flows = strom
        .cross_border_flows(Border::GreatBritainIreland, start, end)
        .await?;

    let to_ie = flows.column("GB > IE").unwrap_or_default();
    let to_gb = flows.column("IE > GB").unwrap_or_default();
    let export: f64 = to_ie.iter().sum();
    let import: f64 = to_gb.iter().sum();
    println!(
        "{} quarter hours; GB->IE total {export:.1} MW, IE->GB total {import:.1} MW",
        flows.len()
    );

    Ok(())
}
