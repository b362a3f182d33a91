//! Validates, deduplicates, and concatenates raw batches into one series.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::connector::RawBatch;
use crate::series::{Point, TimeSeries};
use crate::timeseries::util::{ceil_to_resolution, expected_len, is_aligned};
use strom_types::{Resolution, StromError};

/// Assemble ordered per-window batches into one contiguous `TimeSeries`
/// covering `[start, end)` at the given resolution, presented in
/// `display_tz`.
///
/// - Each batch must be strictly increasing with deltas that are multiples
///   of the resolution and instants on the resolution grid
///   (`MalformedBatch` otherwise).
/// - Where adjacent windows share a boundary instant, the later batch's
///   record wins; providers treat the window end as authoritative.
/// - Records outside `[start, end)` are clipped (sources page in whole
///   civil units).
/// - Any expected instant absent from all batches is an
///   `IncompleteSeries` failure; nothing is filled or interpolated.
///
/// # Errors
/// `MalformedBatch`, `IncompleteSeries`, or the range errors of
/// [`TimeSeries::try_new`].
pub fn assemble<I>(
    connector: &str,
    batches: I,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    resolution: Resolution,
    display_tz: Tz,
) -> Result<TimeSeries, StromError>
where
    I: IntoIterator<Item = RawBatch>,
{
    let aligned = ceil_to_resolution(start, resolution);
    let step = resolution.seconds();

    let mut map: BTreeMap<DateTime<Utc>, f64> = BTreeMap::new();
    let mut overlaps = 0usize;
    for batch in batches {
        validate_batch(connector, &batch, resolution)?;
        for p in batch.points {
            if map.insert(p.ts, p.value).is_some() {
                overlaps += 1;
            }
        }
    }
    if overlaps > 0 {
        tracing::debug!(overlaps, "deduplicated boundary records (later batch wins)");
    }

    let expected = expected_len(aligned, end, resolution);
    let mut points = Vec::with_capacity(expected);
    let mut missing = 0usize;
    let mut first_missing: Option<i64> = None;
    for k in 0..expected {
        let ts = DateTime::from_timestamp(aligned.timestamp() + step * k as i64, 0)
            .expect("grid instant within chrono range");
        match map.get(&ts) {
            Some(&value) => points.push(Point { ts, value }),
            None => {
                missing += 1;
                first_missing.get_or_insert(ts.timestamp());
            }
        }
    }
    if missing > 0 {
        return Err(StromError::IncompleteSeries {
            missing,
            first_missing: first_missing.unwrap_or_default(),
        });
    }

    TimeSeries::try_new(aligned, end, resolution, display_tz, points)
}

fn validate_batch(
    connector: &str,
    batch: &RawBatch,
    resolution: Resolution,
) -> Result<(), StromError> {
    let step = resolution.seconds();
    for p in &batch.points {
        if !is_aligned(p.ts, resolution) {
            return Err(StromError::malformed(
                connector,
                format!("record at {} is off the {resolution} grid", p.ts),
            ));
        }
    }
    for pair in batch.points.windows(2) {
        let delta = (pair[1].ts - pair[0].ts).num_seconds();
        if delta <= 0 {
            return Err(StromError::malformed(
                connector,
                format!("records out of order at {}", pair[1].ts),
            ));
        }
        if delta % step != 0 {
            return Err(StromError::malformed(
                connector,
                format!(
                    "spacing of {delta}s at {} disagrees with the declared {resolution} resolution",
                    pair[1].ts
                ),
            ));
        }
    }
    Ok(())
}
