//! strom-smard
//!
//! Connector for the SMARD portal (smard.de) run by the German federal
//! network agency. Serves day-ahead prices for the German bidding-zone
//! neighbourhood plus per-type generation, per-unit generation, and demand
//! for Germany.
//!
//! The portal pages every series in civil Monday weeks (Europe/Berlin) and
//! keys each page by the epoch-millisecond timestamp of that Monday's civil
//! midnight. Prices are hourly; everything else is quarter-hourly energy
//! (MWh per quarter hour), scaled to MW at decode.
#![warn(missing_docs)]

/// HTTP client for the chart-data and power-plant endpoints.
pub mod client;
/// Power-plant metadata decoding.
pub mod plants;
/// Static table-id mappings.
pub mod tables;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use chrono_tz::Europe::Berlin;

use client::SmardClient;
use strom_core::connector::{
    ConnectorKey, DayAheadPricesProvider, DemandProvider, GenerationByTypeProvider,
    GenerationByUnitProvider, RawBatch, RequestWindow, SourceConnector, TypedBatch, UnitBatch,
    WindowAlignment, WindowSpec,
};
use strom_core::{Point, civil_midnight};
use strom_types::{BiddingZone, PowerPlantUnit, Region, Resolution, StromError};

pub use plants::decode_power_plant_metadata;

const NAME: &str = "strom-smard";

/// Public connector type backed by [`SmardClient`].
pub struct SmardConnector {
    client: SmardClient,
}

impl SmardConnector {
    /// Static connector key for diagnostics.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Build with a default client against smard.de.
    ///
    /// # Errors
    /// Propagates client construction failures.
    pub fn new_default() -> Result<Self, StromError> {
        Ok(Self {
            client: SmardClient::new_default()?,
        })
    }

    /// Build from an existing client (custom base URL, timeout).
    #[must_use]
    pub const fn new_with_client(client: SmardClient) -> Self {
        Self { client }
    }

    /// Fetch and decode the power-plant list.
    ///
    /// Pure boundary input for per-unit downloads; the result is never
    /// cached or persisted by this crate.
    ///
    /// # Errors
    /// `SourceUnavailable` on transport or decode failure.
    pub async fn power_plant_units(&self) -> Result<Vec<PowerPlantUnit>, StromError> {
        let translations = self.client.translations().await?;
        let metadata = self.client.power_plant_metadata().await?;
        plants::decode_power_plant_metadata(&metadata, &translations)
    }

    fn week_spec(resolution: Resolution) -> WindowSpec {
        WindowSpec {
            resolution,
            // One civil week; 169 h covers the fall-back week.
            max_span: Duration::hours(169),
            reporting_tz: Berlin,
            alignment: WindowAlignment::CivilWeek(Weekday::Mon),
        }
    }

    /// Epoch milliseconds of the civil Monday midnight (Europe/Berlin) of
    /// the week containing the window start; SMARD keys pages by it.
    fn week_page_ms(window: &RequestWindow) -> i64 {
        let date = window.start.with_timezone(&Berlin).date_naive();
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        civil_midnight(monday, Berlin).timestamp_millis()
    }

    fn decode_points(
        rows: Vec<(i64, Option<f64>)>,
        scale: f64,
    ) -> Result<RawBatch, StromError> {
        let mut points = Vec::with_capacity(rows.len());
        for (ms, value) in rows {
            let Some(value) = value else {
                // Missing observation; gap detection decides downstream.
                continue;
            };
            let ts: DateTime<Utc> = DateTime::from_timestamp_millis(ms).ok_or_else(|| {
                StromError::malformed(NAME, format!("timestamp {ms}ms out of range"))
            })?;
            points.push(Point {
                ts,
                value: value * scale,
            });
        }
        Ok(RawBatch::new(points))
    }

    async fn fetch_quarterhour_table(
        &self,
        table_id: &str,
        region: &str,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        let rows = self
            .client
            .chart_series(table_id, region, "quarterhour", Self::week_page_ms(window))
            .await?;
        // MWh per quarter hour -> MW.
        Self::decode_points(rows, 4.0)
    }
}

#[async_trait]
impl DayAheadPricesProvider for SmardConnector {
    fn price_window_spec(&self, _zone: BiddingZone) -> WindowSpec {
        Self::week_spec(Resolution::Hour)
    }

    async fn day_ahead_prices(
        &self,
        zone: BiddingZone,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        let table = tables::zone_table_id(zone);
        let rows = self
            .client
            .chart_series(table, "DE", "hour", Self::week_page_ms(window))
            .await?;
        Self::decode_points(rows, 1.0)
    }
}

#[async_trait]
impl GenerationByTypeProvider for SmardConnector {
    fn generation_window_spec(&self, _region: Region) -> WindowSpec {
        Self::week_spec(Resolution::QuarterHour)
    }

    async fn generation_by_type(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<Vec<TypedBatch>, StromError> {
        if region != Region::Germany {
            return Err(StromError::unsupported(format!(
                "generation-by-type/{region}"
            )));
        }
        let mut out = Vec::with_capacity(tables::DE_GENERATION_TABLES.len());
        for &(kind, direction, table) in tables::DE_GENERATION_TABLES {
            let batch = self.fetch_quarterhour_table(table, "DE", window).await?;
            out.push(TypedBatch {
                kind,
                direction,
                batch,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl GenerationByUnitProvider for SmardConnector {
    fn unit_window_spec(&self) -> WindowSpec {
        Self::week_spec(Resolution::QuarterHour)
    }

    async fn generation_by_unit(
        &self,
        units: &[PowerPlantUnit],
        window: &RequestWindow,
    ) -> Result<Vec<UnitBatch>, StromError> {
        let mut out = Vec::with_capacity(units.len());
        for unit in units {
            let batch = self
                .fetch_quarterhour_table(&unit.api_id, unit.control_area.as_str(), window)
                .await?;
            out.push(UnitBatch {
                unit: unit.clone(),
                batch,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl DemandProvider for SmardConnector {
    fn demand_window_spec(&self, _region: Region) -> WindowSpec {
        Self::week_spec(Resolution::QuarterHour)
    }

    async fn demand(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        if region != Region::Germany {
            return Err(StromError::unsupported(format!("demand/{region}")));
        }
        self.fetch_quarterhour_table(tables::DE_DEMAND_TABLE, "DE", window)
            .await
    }
}

impl SourceConnector for SmardConnector {
    fn name(&self) -> &'static str {
        NAME
    }
    fn vendor(&self) -> &'static str {
        "SMARD (Bundesnetzagentur)"
    }

    fn supports_region(&self, region: Region) -> bool {
        region == Region::Germany
    }

    fn as_day_ahead_prices_provider(&self) -> Option<&dyn DayAheadPricesProvider> {
        Some(self as &dyn DayAheadPricesProvider)
    }
    fn as_generation_by_type_provider(&self) -> Option<&dyn GenerationByTypeProvider> {
        Some(self as &dyn GenerationByTypeProvider)
    }
    fn as_generation_by_unit_provider(&self) -> Option<&dyn GenerationByUnitProvider> {
        Some(self as &dyn GenerationByUnitProvider)
    }
    fn as_demand_provider(&self) -> Option<&dyn DemandProvider> {
        Some(self as &dyn DemandProvider)
    }
}
