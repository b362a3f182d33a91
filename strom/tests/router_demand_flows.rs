use std::sync::Arc;

use chrono::TimeZone;
use chrono_tz::Europe::{Berlin, Dublin};
use strom::{Border, Capability, Region, Strom, StromError};
use strom_mock::MockConnector;

fn strom() -> Strom {
    Strom::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn demand_assembles_across_daily_windows() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 9, 20, 0, 0, 0).unwrap();

    let series = strom.demand(Region::Germany, start, end).await.unwrap();
    assert_eq!(series.len(), 2 * 96);
    assert!(series.values().all(|v| v >= 40_000.0));
    assert_eq!(series.display_tz(), Berlin);
}

#[tokio::test]
async fn demand_across_fall_back_day_carries_the_extra_hour() {
    let strom = strom();
    // Berlin gains an hour on 2023-10-29.
    let start = Berlin.with_ymd_and_hms(2023, 10, 29, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 10, 30, 0, 0, 0).unwrap();

    let series = strom.demand(Region::Germany, start, end).await.unwrap();
    assert_eq!(series.len(), 100);
}

#[tokio::test]
async fn flows_table_carries_both_directions() {
    let strom = strom();
    let start = Dublin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Dublin.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();

    let table = strom
        .cross_border_flows(Border::GreatBritainIreland, start, end)
        .await
        .unwrap();
    assert_eq!(table.len(), 96);
    assert!(table.column("GB > IE").is_some());
    assert!(table.column("IE > GB").is_some());
    assert_eq!(table.display_tz(), Dublin);
}

#[tokio::test]
async fn failing_flow_source_returns_no_table() {
    let strom = Strom::builder()
        .with_connector(Arc::new(MockConnector::failing(Capability::CrossBorderFlows)))
        .build()
        .unwrap();
    let start = Dublin.with_ymd_and_hms(2023, 9, 18, 0, 0, 0).unwrap();
    let end = Dublin.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap();

    let err = strom
        .cross_border_flows(Border::GreatBritainIreland, start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::SourceUnavailable { .. }));
}
