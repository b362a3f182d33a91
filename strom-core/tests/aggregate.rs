use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::UTC;
use strom_core::{Point, TimeSeries, nett, pivot};
use strom_types::{Direction, GenerationType, Resolution, StromError};

fn ts(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, 18, h, 0, 0).unwrap()
}

fn hourly(values: &[f64]) -> TimeSeries {
    let points = values
        .iter()
        .enumerate()
        .map(|(k, &value)| Point {
            ts: ts(u32::try_from(k).unwrap()),
            value,
        })
        .collect();
    TimeSeries::try_new(
        ts(0),
        ts(u32::try_from(values.len()).unwrap()),
        Resolution::Hour,
        UTC,
        points,
    )
    .unwrap()
}

#[test]
fn nett_collapses_storage_into_a_signed_sum() {
    let input = vec![
        (
            GenerationType::HydroPumpedStorage,
            Direction::Generation,
            hourly(&[10.0, 20.0, 30.0]),
        ),
        (
            GenerationType::HydroPumpedStorage,
            Direction::Consumption,
            hourly(&[5.0, 15.0, 25.0]),
        ),
    ];
    let out = nett(input).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0, GenerationType::HydroPumpedStorage);
    assert_eq!(out[0].1.values().collect::<Vec<_>>(), vec![5.0, 5.0, 5.0]);
}

#[test]
fn nett_leaves_single_direction_types_untouched() {
    let solar = hourly(&[1.0, 2.0, 3.0]);
    let out = nett(vec![(
        GenerationType::Solar,
        Direction::Generation,
        solar.clone(),
    )])
    .unwrap();
    assert_eq!(out[0].1, solar);
}

#[test]
fn nett_rejects_diverging_instant_sets() {
    let input = vec![
        (
            GenerationType::HydroPumpedStorage,
            Direction::Generation,
            hourly(&[10.0, 20.0, 30.0]),
        ),
        (
            GenerationType::HydroPumpedStorage,
            Direction::Consumption,
            hourly(&[5.0, 15.0]),
        ),
    ];
    assert!(matches!(
        nett(input),
        Err(StromError::GroupMismatch { .. })
    ));
}

#[test]
fn pivot_builds_one_column_per_key() {
    let table = pivot(vec![
        ("DE_LU".to_string(), hourly(&[80.0, 81.0, 82.0])),
        ("FR".to_string(), hourly(&[70.0, 71.0, 72.0])),
    ])
    .unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.columns().len(), 2);
    assert_eq!(table.column("FR").unwrap(), &[70.0, 71.0, 72.0]);
    assert!(table.column("NL").is_none());
}

#[test]
fn pivot_rejects_partial_coverage() {
    let err = pivot(vec![
        ("DE_LU".to_string(), hourly(&[80.0, 81.0, 82.0])),
        ("FR".to_string(), hourly(&[70.0, 71.0])),
    ])
    .unwrap_err();
    assert!(matches!(err, StromError::GroupMismatch { .. }));
}

#[test]
fn pivot_rejects_duplicate_keys_and_empty_input() {
    assert!(matches!(
        pivot(vec![
            ("DE_LU".to_string(), hourly(&[1.0])),
            ("DE_LU".to_string(), hourly(&[2.0])),
        ]),
        Err(StromError::InvalidArg(_))
    ));
    assert!(matches!(pivot(vec![]), Err(StromError::InvalidArg(_))));
}
