use std::sync::Arc;

use chrono::TimeZone;
use chrono_tz::Europe::Berlin;
use strom::{BiddingZone, Strom, StromError};
use strom_mock::MockConnector;

fn strom() -> Strom {
    Strom::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn panel_pivots_one_column_per_zone() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 3, 0, 0, 0).unwrap();

    let report = strom
        .prices_panel()
        .zones(&[BiddingZone::DeLu, BiddingZone::Fr, BiddingZone::Nl])
        .unwrap()
        .interval(start, end)
        .run()
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    let table = report.table.unwrap();
    assert_eq!(table.len(), 24);
    assert_eq!(table.columns().len(), 3);
    assert!(table.column("DE_LU").is_some());
}

#[tokio::test]
async fn out_of_availability_zone_becomes_a_warning() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 3, 0, 0, 0).unwrap();

    // DE_AT_LU retired in 2018; its failure must not abort the other zones.
    let report = strom
        .prices_panel()
        .zones(&[BiddingZone::DeLu, BiddingZone::DeAtLu])
        .unwrap()
        .interval(start, end)
        .run()
        .await
        .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0],
        StromError::InvalidRange { .. }
    ));
    let table = report.table.unwrap();
    assert_eq!(table.columns().len(), 1);
    assert!(table.column("DE_AT_LU").is_none());
}

#[tokio::test]
async fn panel_validates_its_inputs() {
    let strom = strom();
    let start = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 3, 0, 0, 0).unwrap();

    assert!(matches!(
        strom
            .prices_panel()
            .zones(&[BiddingZone::DeLu, BiddingZone::DeLu]),
        Err(StromError::InvalidArg(_))
    ));

    // No zones.
    assert!(matches!(
        strom.prices_panel().interval(start, end).run().await,
        Err(StromError::InvalidArg(_))
    ));

    // No interval.
    assert!(matches!(
        strom
            .prices_panel()
            .add_zone(BiddingZone::DeLu)
            .unwrap()
            .run()
            .await,
        Err(StromError::InvalidArg(_))
    ));
}
