//! Positional mapping of dashboard records onto civil quarter-hour slots.
//!
//! The dashboard always reports one record per civil quarter hour of a
//! 96-slot day, even around daylight-saving transitions: on the
//! spring-forward day it ships four empty records for the skipped hour, on
//! the fall-back day it reports the doubled hour only once.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use strom_core::{Point, civil_midnight};
use strom_types::StromError;

const CONNECTOR: &str = "strom-eirgrid";
const NORMAL_DAY: usize = 96;
const SHORT_DAY: usize = 92;
const LONG_DAY: usize = 100;

/// UTC instants of every quarter-hour slot of one civil day in `tz`
/// (92, 96, or 100 slots).
#[must_use]
pub fn day_slots(date: NaiveDate, tz: Tz) -> Vec<DateTime<Utc>> {
    let start = civil_midnight(date, tz);
    let end = civil_midnight(date.succ_opt().expect("date within chrono range"), tz);
    let mut slots = Vec::with_capacity(NORMAL_DAY);
    let mut cur = start;
    while cur < end {
        slots.push(cur);
        cur += Duration::minutes(15);
    }
    slots
}

/// Map dashboard values onto day slots.
///
/// - Normal day: records map one-to-one.
/// - Spring-forward day (92 slots, 96 records): records 4..8 cover the
///   nonexistent hour and are dropped.
/// - Fall-back day (100 slots, 96 records): the doubled hour is reported
///   once; slots 4..12 beyond the reported pass stay unmapped and surface
///   as a gap downstream.
///
/// `null` values never produce a record.
///
/// # Errors
/// `MalformedBatch` when the record count fits no known day shape.
pub fn map_rows(
    slots: &[DateTime<Utc>],
    values: &[Option<f64>],
) -> Result<Vec<Point>, StromError> {
    let pairs: Vec<(DateTime<Utc>, Option<f64>)> = if values.len() == slots.len() {
        slots.iter().copied().zip(values.iter().copied()).collect()
    } else if values.len() == NORMAL_DAY && slots.len() == SHORT_DAY {
        slots
            .iter()
            .enumerate()
            .map(|(i, &ts)| (ts, values[if i < 4 { i } else { i + 4 }]))
            .collect()
    } else if values.len() == NORMAL_DAY && slots.len() == LONG_DAY {
        slots
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                if i < 4 {
                    Some((ts, values[i]))
                } else if i < 12 {
                    None
                } else {
                    Some((ts, values[i - 4]))
                }
            })
            .collect()
    } else {
        return Err(StromError::malformed(
            CONNECTOR,
            format!(
                "{} records for a {}-slot day",
                values.len(),
                slots.len()
            ),
        ));
    };

    Ok(pairs
        .into_iter()
        .filter_map(|(ts, value)| value.map(|value| Point { ts, value }))
        .collect())
}
