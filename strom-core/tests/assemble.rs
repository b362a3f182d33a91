use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use chrono_tz::UTC;
use strom_core::{Point, RawBatch, assemble};
use strom_types::{Resolution, StromError};

fn ts(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, 18, h, m, 0).unwrap()
}

fn batch(points: &[(DateTime<Utc>, f64)]) -> RawBatch {
    RawBatch::new(
        points
            .iter()
            .map(|&(ts, value)| Point { ts, value })
            .collect(),
    )
}

#[test]
fn contiguous_batches_concatenate() {
    let a = batch(&[(ts(0, 0), 1.0), (ts(1, 0), 2.0)]);
    let b = batch(&[(ts(2, 0), 3.0), (ts(3, 0), 4.0)]);
    let series = assemble("test", [a, b], ts(0, 0), ts(4, 0), Resolution::Hour, UTC).unwrap();
    assert_eq!(series.len(), 4);
    assert_eq!(series.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn shared_boundary_instant_takes_the_later_batch() {
    let a = batch(&[(ts(0, 0), 1.0), (ts(1, 0), 99.0)]);
    let b = batch(&[(ts(1, 0), 2.0), (ts(2, 0), 3.0)]);
    let series = assemble("test", [a, b], ts(0, 0), ts(3, 0), Resolution::Hour, UTC).unwrap();
    assert_eq!(series.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    // No duplicate instant survives.
    let instants: Vec<_> = series.instants().collect();
    let mut deduped = instants.clone();
    deduped.dedup();
    assert_eq!(instants, deduped);
}

#[test]
fn assembly_is_idempotent() {
    let make = || {
        vec![
            batch(&[(ts(0, 0), 1.0), (ts(1, 0), 2.0)]),
            batch(&[(ts(1, 0), 2.5), (ts(2, 0), 3.0)]),
        ]
    };
    let first = assemble("test", make(), ts(0, 0), ts(3, 0), Resolution::Hour, UTC).unwrap();
    let second = assemble("test", make(), ts(0, 0), ts(3, 0), Resolution::Hour, UTC).unwrap();
    assert_eq!(first, second);
}

#[test]
fn records_outside_the_interval_are_clipped() {
    // Sources page in whole civil units; surplus records must not leak.
    let a = batch(&[
        (ts(0, 0) - Duration::hours(2), -1.0),
        (ts(0, 0), 1.0),
        (ts(1, 0), 2.0),
        (ts(2, 0), 3.0),
    ]);
    let series = assemble("test", [a], ts(0, 0), ts(2, 0), Resolution::Hour, UTC).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.start(), ts(0, 0));
}

#[test]
fn a_removed_record_is_a_hard_failure() {
    let a = batch(&[(ts(0, 0), 1.0), (ts(2, 0), 3.0)]);
    let err = assemble("test", [a], ts(0, 0), ts(3, 0), Resolution::Hour, UTC).unwrap_err();
    match err {
        StromError::IncompleteSeries {
            missing,
            first_missing,
        } => {
            assert_eq!(missing, 1);
            assert_eq!(first_missing, ts(1, 0).timestamp());
        }
        other => panic!("expected IncompleteSeries, got {other:?}"),
    }
}

#[test]
fn unordered_batch_is_malformed() {
    let a = batch(&[(ts(1, 0), 2.0), (ts(0, 0), 1.0)]);
    assert!(matches!(
        assemble("test", [a], ts(0, 0), ts(2, 0), Resolution::Hour, UTC),
        Err(StromError::MalformedBatch { .. })
    ));
}

#[test]
fn off_resolution_spacing_is_malformed() {
    let a = batch(&[
        (ts(0, 0), 1.0),
        (ts(0, 40), 1.5),
        (ts(1, 0), 2.0),
    ]);
    let err = assemble("test", [a], ts(0, 0), ts(2, 0), Resolution::Hour, UTC).unwrap_err();
    match err {
        StromError::MalformedBatch { connector, .. } => assert_eq!(connector, "test"),
        other => panic!("expected MalformedBatch, got {other:?}"),
    }
}

#[test]
fn display_timezone_does_not_touch_instants() {
    let a = batch(&[(ts(0, 0), 1.0), (ts(1, 0), 2.0)]);
    let series = assemble("test", [a], ts(0, 0), ts(2, 0), Resolution::Hour, Berlin).unwrap();

    // Round-trip: re-expressing in the caller zone and mapping back to UTC
    // yields identical instant identities.
    let back: Vec<DateTime<Utc>> = series
        .zoned()
        .map(|(local, _)| local.with_timezone(&Utc))
        .collect();
    assert_eq!(back, series.instants().collect::<Vec<_>>());

    // Idempotent re-expression.
    let again = series.clone().with_display_tz(Berlin);
    assert_eq!(again, series);
}
