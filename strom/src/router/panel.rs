use chrono::DateTime;
use chrono_tz::Tz;

use crate::Strom;
use strom_core::{TimeSeries, WideTable, pivot};
use strom_types::{BiddingZone, StromError};

/// Result of a multi-zone price download: the pivoted table when at least
/// one zone succeeded, and the per-zone failures that did not abort the
/// batch.
#[derive(Debug)]
pub struct PanelReport {
    /// Wide table keyed by instant, one column per successful zone.
    pub table: Option<WideTable>,
    /// Per-zone failures, in zone order.
    pub warnings: Vec<StromError>,
}

/// Builder to download day-ahead prices for several bidding zones into one
/// wide table.
pub struct PricesPanelBuilder<'a> {
    strom: &'a Strom,
    zones: Vec<BiddingZone>,
    interval: Option<(DateTime<Tz>, DateTime<Tz>)>,
}

impl<'a> PricesPanelBuilder<'a> {
    /// Create a new builder bound to a `Strom` instance.
    #[must_use]
    pub const fn new(strom: &'a Strom) -> Self {
        Self {
            strom,
            zones: Vec::new(),
            interval: None,
        }
    }

    /// Replace the zone list.
    ///
    /// # Errors
    /// Returns `InvalidArg` on duplicate zones.
    pub fn zones(mut self, zones: &[BiddingZone]) -> Result<Self, StromError> {
        for (i, zone) in zones.iter().enumerate() {
            if zones[..i].contains(zone) {
                return Err(StromError::InvalidArg(format!(
                    "duplicate zone '{zone}' in zones list"
                )));
            }
        }
        self.zones = zones.to_vec();
        Ok(self)
    }

    /// Add a single zone.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the zone is already listed.
    pub fn add_zone(mut self, zone: BiddingZone) -> Result<Self, StromError> {
        if self.zones.contains(&zone) {
            return Err(StromError::InvalidArg(format!(
                "zone '{zone}' already exists in zones list"
            )));
        }
        self.zones.push(zone);
        Ok(self)
    }

    /// Set the `[start, end)` interval; the timezone of `start` becomes the
    /// display timezone of the table.
    #[must_use]
    pub const fn interval(mut self, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        self.interval = Some((start, end));
        self
    }

    /// Download every zone sequentially and pivot the successes.
    ///
    /// A zone failure lands in the report's `warnings` without aborting the
    /// remaining zones; the table is present when at least one zone
    /// succeeded. Individual zone series are still all-or-nothing.
    ///
    /// # Errors
    /// Returns an error when no zones or no interval were specified, or
    /// when successful zones disagree on coverage (possible under the
    /// clipping availability policy).
    pub async fn run(self) -> Result<PanelReport, StromError> {
        if self.zones.is_empty() {
            return Err(StromError::InvalidArg(
                "no zones specified for price panel".into(),
            ));
        }
        let Some((start, end)) = self.interval else {
            return Err(StromError::InvalidArg(
                "no interval specified for price panel".into(),
            ));
        };

        let mut columns: Vec<(String, TimeSeries)> = Vec::new();
        let mut warnings: Vec<StromError> = Vec::new();
        for &zone in &self.zones {
            match self.strom.day_ahead_prices(zone, start, end).await {
                Ok(series) => columns.push((zone.code().to_string(), series)),
                Err(e) => {
                    tracing::warn!(%zone, error = %e, "zone skipped in price panel");
                    warnings.push(e);
                }
            }
        }

        let table = if columns.is_empty() {
            None
        } else {
            Some(pivot(columns)?)
        };
        Ok(PanelReport { table, warnings })
    }
}

impl Strom {
    /// Begin building a multi-zone day-ahead price download.
    #[must_use]
    pub const fn prices_panel(&'_ self) -> PricesPanelBuilder<'_> {
        PricesPanelBuilder::new(self)
    }
}
