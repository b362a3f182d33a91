//! UTC-anchored series containers returned to callers.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::timeseries::util::{expected_len, is_aligned};
use strom_types::{Resolution, StromError};

/// A single (instant, value) record. The instant is always UTC-anchored;
/// values are MW for power series and EUR/MWh for prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// UTC instant of the record.
    pub ts: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
}

/// A strictly ordered, gap-free series at a single fixed resolution.
///
/// Instants are stored as UTC; `display_tz` only affects how the series is
/// presented via [`TimeSeries::zoned`] and never alters instant identity.
/// Construction enforces `len == (end - start) / resolution`; a series with
/// a missing step cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    resolution: Resolution,
    display_tz: Tz,
    points: Vec<Point>,
}

impl TimeSeries {
    /// Build a series over `[start, end)`, validating the grid invariant.
    ///
    /// # Errors
    /// - `InvalidRange` when `start >= end`.
    /// - `InvalidArg` when `start` is off the resolution grid or the points
    ///   do not form exactly the expected contiguous grid.
    pub fn try_new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        resolution: Resolution,
        display_tz: Tz,
        points: Vec<Point>,
    ) -> Result<Self, StromError> {
        if start >= end {
            return Err(StromError::invalid_range(format!(
                "start {start} is not before end {end}"
            )));
        }
        if !is_aligned(start, resolution) {
            return Err(StromError::InvalidArg(format!(
                "series start {start} is not on a {resolution} boundary"
            )));
        }
        let expected = expected_len(start, end, resolution);
        if points.len() != expected {
            return Err(StromError::InvalidArg(format!(
                "series holds {} points, expected {expected}",
                points.len()
            )));
        }
        let step = resolution.duration();
        for (k, p) in points.iter().enumerate() {
            let want = start + step * i32::try_from(k).unwrap_or(i32::MAX);
            if p.ts != want {
                return Err(StromError::InvalidArg(format!(
                    "series point {k} sits at {}, expected {want}",
                    p.ts
                )));
            }
        }
        Ok(Self {
            start,
            end,
            resolution,
            display_tz,
            points,
        })
    }

    /// Coverage start (inclusive), UTC.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Coverage end (exclusive), UTC.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Fixed spacing of the series.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Timezone the series is presented in.
    #[must_use]
    pub const fn display_tz(&self) -> Tz {
        self.display_tz
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points. Never true for a constructed
    /// series, present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The underlying UTC-anchored points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Values in instant order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// UTC instants in order.
    pub fn instants(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.points.iter().map(|p| p.ts)
    }

    /// Records re-expressed in the display timezone. The conversion is pure
    /// presentation: mapping back to UTC yields the identical instants.
    pub fn zoned(&self) -> impl Iterator<Item = (DateTime<Tz>, f64)> + '_ {
        let tz = self.display_tz;
        self.points.iter().map(move |p| (p.ts.with_timezone(&tz), p.value))
    }

    /// Re-express the series in another timezone. Idempotent; instant
    /// identity is untouched.
    #[must_use]
    pub fn with_display_tz(mut self, tz: Tz) -> Self {
        self.display_tz = tz;
        self
    }
}

/// One named column of a [`WideTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column label (zone code, generation type, unit name, flow direction).
    pub name: String,
    /// Values aligned with the table index.
    pub values: Vec<f64>,
}

/// A wide-format table: one shared instant index, one column per key.
///
/// Produced only by the aggregation layer; every column covers the full
/// index (missing coverage fails aggregation, it never yields null columns).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideTable {
    index: Vec<DateTime<Utc>>,
    resolution: Resolution,
    display_tz: Tz,
    columns: Vec<Column>,
}

impl WideTable {
    pub(crate) fn new(
        index: Vec<DateTime<Utc>>,
        resolution: Resolution,
        display_tz: Tz,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            index,
            resolution,
            display_tz,
            columns,
        }
    }

    /// Shared UTC instant index.
    #[must_use]
    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// Fixed spacing of the index.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Timezone the table is presented in.
    #[must_use]
    pub const fn display_tz(&self) -> Tz {
        self.display_tz
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up one column by label.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Index re-expressed in the display timezone.
    pub fn zoned_index(&self) -> impl Iterator<Item = DateTime<Tz>> + '_ {
        let tz = self.display_tz;
        self.index.iter().map(move |ts| ts.with_timezone(&tz))
    }

    /// Re-express the table in another timezone. Idempotent.
    #[must_use]
    pub fn with_display_tz(mut self, tz: Tz) -> Self {
        self.display_tz = tz;
        self
    }
}
