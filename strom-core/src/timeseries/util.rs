//! Shared helpers for grid alignment and step accounting.

use chrono::{DateTime, Utc};
use strom_types::Resolution;

/// Whether the instant sits exactly on the resolution grid.
#[must_use]
pub fn is_aligned(ts: DateTime<Utc>, resolution: Resolution) -> bool {
    ts.timestamp_subsec_nanos() == 0 && ts.timestamp().rem_euclid(resolution.seconds()) == 0
}

/// Round an instant up to the next resolution boundary (identity when the
/// instant is already aligned).
#[must_use]
pub fn ceil_to_resolution(ts: DateTime<Utc>, resolution: Resolution) -> DateTime<Utc> {
    let step = resolution.seconds();
    let mut secs = ts.timestamp();
    if ts.timestamp_subsec_nanos() > 0 {
        secs += 1;
    }
    let rem = secs.rem_euclid(step);
    if rem != 0 {
        secs += step - rem;
    }
    DateTime::from_timestamp(secs, 0).expect("aligned timestamp within chrono range")
}

/// Number of grid instants `t = start + k * resolution` with `t < end`,
/// assuming `start` is aligned.
#[must_use]
pub fn expected_len(start: DateTime<Utc>, end: DateTime<Utc>, resolution: Resolution) -> usize {
    let span = (end - start).num_seconds();
    if span <= 0 {
        return 0;
    }
    let step = resolution.seconds();
    usize::try_from((span + step - 1) / step).unwrap_or(0)
}
