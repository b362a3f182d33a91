mod helpers;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use helpers::NoopConnector;
use strom::{BiddingZone, Capability, Strom, StromError};
use strom_mock::MockConnector;

fn strom_with(connector: MockConnector) -> Strom {
    Strom::builder()
        .with_connector(Arc::new(connector))
        .build()
        .unwrap()
}

#[tokio::test]
async fn one_week_of_hourly_prices_has_168_rows() {
    let strom = strom_with(MockConnector::new());
    let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 7, 23, 59, 0).unwrap();

    let prices = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await
        .unwrap();

    assert_eq!(prices.len(), 168);
    assert_eq!(prices.display_tz(), Berlin);
    assert_eq!(prices.start(), start.with_timezone(&Utc));

    // Instants are strictly increasing with no duplicates.
    let instants: Vec<_> = prices.instants().collect();
    assert!(instants.windows(2).all(|p| p[0] < p[1]));

    // Values follow the mock's deterministic function.
    for p in prices.points() {
        assert_eq!(p.value, 50.0 + MockConnector::value_at(p.ts));
    }
}

#[tokio::test]
async fn spring_forward_week_keeps_the_correct_step_count() {
    let strom = strom_with(MockConnector::new());
    let start = Berlin.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 3, 27, 0, 0, 0).unwrap();

    let prices = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await
        .unwrap();
    // The civil week loses one hour to DST.
    assert_eq!(prices.len(), 167);
}

#[tokio::test]
async fn failed_window_returns_no_data() {
    let strom = strom_with(MockConnector::failing(Capability::DayAheadPrices));
    let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();

    let err = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::SourceUnavailable { .. }));
}

#[tokio::test]
async fn a_gap_in_the_source_fails_the_call() {
    let missing = Berlin
        .with_ymd_and_hms(2023, 1, 1, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let strom = strom_with(MockConnector::with_missing(vec![missing]));
    let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();

    let err = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await
        .unwrap_err();
    match err {
        StromError::IncompleteSeries {
            missing,
            first_missing,
        } => {
            assert_eq!(missing, 1);
            assert_eq!(first_missing, 1_672_570_800);
        }
        other => panic!("expected IncompleteSeries, got {other:?}"),
    }
}

#[tokio::test]
async fn reversed_interval_is_rejected_before_any_fetch() {
    let strom = strom_with(MockConnector::new());
    let start = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    assert!(matches!(
        strom.day_ahead_prices(BiddingZone::DeLu, start, end).await,
        Err(StromError::InvalidRange { .. })
    ));
}

#[tokio::test]
async fn missing_capability_is_unsupported() {
    let strom = Strom::builder()
        .with_connector(Arc::new(NoopConnector))
        .build()
        .unwrap();
    let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let err = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::Unsupported { .. }));
}

#[test]
fn builder_requires_at_least_one_connector() {
    assert!(matches!(
        Strom::builder().build(),
        Err(StromError::InvalidArg(_))
    ));
}
