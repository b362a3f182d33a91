use std::sync::Arc;

use chrono::{TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use strom::{AvailabilityPolicy, BiddingZone, Strom, StromError};
use strom_mock::MockConnector;

fn strom(policy: AvailabilityPolicy) -> Strom {
    Strom::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .availability_policy(policy)
        .build()
        .unwrap()
}

#[tokio::test]
async fn retired_zone_is_rejected_after_its_closure() {
    let strom = strom(AvailabilityPolicy::Reject);
    let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let err = strom
        .day_ahead_prices(BiddingZone::DeAtLu, start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::InvalidRange { .. }));
}

#[tokio::test]
async fn successor_zone_is_rejected_before_its_opening() {
    let strom = strom(AvailabilityPolicy::Reject);
    let start = Berlin.with_ymd_and_hms(2018, 9, 29, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2018, 10, 2, 0, 0, 0).unwrap();
    let err = strom
        .day_ahead_prices(BiddingZone::DeLu, start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::InvalidRange { .. }));
}

#[tokio::test]
async fn in_range_request_passes_the_reject_policy() {
    let strom = strom(AvailabilityPolicy::Reject);
    let start = Berlin.with_ymd_and_hms(2018, 9, 3, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2018, 9, 5, 0, 0, 0).unwrap();
    let prices = strom
        .day_ahead_prices(BiddingZone::DeAtLu, start, end)
        .await
        .unwrap();
    assert_eq!(prices.len(), 48);
}

#[tokio::test]
async fn clip_narrows_to_the_published_range() {
    let strom = strom(AvailabilityPolicy::Clip);
    // Straddles the DE_AT_LU closure on 2018-09-30.
    let start = Berlin.with_ymd_and_hms(2018, 9, 29, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2018, 10, 3, 0, 0, 0).unwrap();
    let prices = strom
        .day_ahead_prices(BiddingZone::DeAtLu, start, end)
        .await
        .unwrap();

    // Coverage ends at the first civil midnight after the closure date.
    let expected_end = Berlin
        .with_ymd_and_hms(2018, 10, 1, 0, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(prices.end(), expected_end);
    assert_eq!(prices.len(), 48);
}

#[tokio::test]
async fn clip_with_empty_intersection_still_rejects() {
    let strom = strom(AvailabilityPolicy::Clip);
    let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let err = strom
        .day_ahead_prices(BiddingZone::DeAtLu, start, end)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::InvalidRange { .. }));
}
