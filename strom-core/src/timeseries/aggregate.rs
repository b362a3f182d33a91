//! Post-processing: nett aggregation and wide-format pivoting.

use crate::series::{Column, TimeSeries, WideTable};
use strom_types::{Direction, GenerationType, StromError};

fn same_coverage(a: &TimeSeries, b: &TimeSeries) -> bool {
    a.start() == b.start() && a.end() == b.end() && a.resolution() == b.resolution()
}

/// Collapse paired generation/consumption series into one net series per
/// generation type via a signed sum (consumption counts negative).
///
/// Input order is preserved: the output lists types in first-seen order.
///
/// # Errors
/// `GroupMismatch` when members of a type do not share the identical
/// instant set.
pub fn nett(
    series: Vec<(GenerationType, Direction, TimeSeries)>,
) -> Result<Vec<(GenerationType, TimeSeries)>, StromError> {
    let mut out: Vec<(GenerationType, TimeSeries)> = Vec::new();
    for (kind, direction, member) in series {
        let sign = match direction {
            Direction::Generation => 1.0,
            Direction::Consumption => -1.0,
        };
        match out.iter_mut().find(|(k, _)| *k == kind) {
            None => {
                let signed = if sign < 0.0 { negate(&member)? } else { member };
                out.push((kind, signed));
            }
            Some((_, acc)) => {
                if !same_coverage(acc, &member) {
                    return Err(StromError::group_mismatch(format!(
                        "members of {kind} do not share one instant set"
                    )));
                }
                let points = acc
                    .points()
                    .iter()
                    .zip(member.points())
                    .map(|(a, m)| crate::series::Point {
                        ts: a.ts,
                        value: a.value + sign * m.value,
                    })
                    .collect();
                *acc = TimeSeries::try_new(
                    acc.start(),
                    acc.end(),
                    acc.resolution(),
                    acc.display_tz(),
                    points,
                )?;
            }
        }
    }
    Ok(out)
}

fn negate(series: &TimeSeries) -> Result<TimeSeries, StromError> {
    let points = series
        .points()
        .iter()
        .map(|p| crate::series::Point {
            ts: p.ts,
            value: -p.value,
        })
        .collect();
    TimeSeries::try_new(
        series.start(),
        series.end(),
        series.resolution(),
        series.display_tz(),
        points,
    )
}

/// Reshape keyed series into one wide table: shared instant index, one
/// column per key.
///
/// # Errors
/// - `InvalidArg` when the input is empty or a key repeats.
/// - `GroupMismatch` when any series diverges from the shared instant
///   coverage; divergence never yields a null-filled column.
pub fn pivot(columns: Vec<(String, TimeSeries)>) -> Result<WideTable, StromError> {
    let Some((_, first)) = columns.first() else {
        return Err(StromError::InvalidArg(
            "cannot pivot an empty series list".into(),
        ));
    };
    let index: Vec<_> = first.instants().collect();
    let resolution = first.resolution();
    let display_tz = first.display_tz();

    let mut out: Vec<Column> = Vec::with_capacity(columns.len());
    for (name, series) in &columns {
        if out.iter().any(|c| c.name == *name) {
            return Err(StromError::InvalidArg(format!(
                "duplicate column '{name}' in pivot input"
            )));
        }
        if !same_coverage(first, series) {
            return Err(StromError::group_mismatch(format!(
                "column '{name}' does not cover the shared instant range"
            )));
        }
        out.push(Column {
            name: name.clone(),
            values: series.values().collect(),
        });
    }
    Ok(WideTable::new(index, resolution, display_tz, out))
}
