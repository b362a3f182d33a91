//! strom-elexon
//!
//! Connector for the Elexon BMRS reporting API. Serves per-type generation
//! (report B1620) and demand (report B0610) for Great Britain.
//!
//! BMRS pages by settlement date, one civil day in Europe/London, and
//! addresses records by 1-based half-hour settlement period. Mapping period
//! `p` to `civil midnight + (p - 1) * 30 min` is DST-correct by
//! construction: short, normal, and long days carry 46, 48, and 50 periods.
#![warn(missing_docs)]

/// HTTP client for the reporting endpoints.
pub mod client;
/// Settlement CSV decoding.
pub mod decode;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Europe::London;

use client::ElexonClient;
use decode::{SettlementRows, numeric_cell, period_cell};
use strom_core::connector::{
    ConnectorKey, DemandProvider, GenerationByTypeProvider, RawBatch, RequestWindow,
    SourceConnector, TypedBatch, WindowAlignment, WindowSpec,
};
use strom_core::{Point, civil_midnight};
use strom_types::{Direction, GenerationType, Region, Resolution, StromError};

const NAME: &str = "strom-elexon";

/// Fuel/technology types BMRS publishes for Great Britain.
pub const GB_GENERATION_TYPES: &[GenerationType] = &[
    GenerationType::Biomass,
    GenerationType::HydroPumpedStorage,
    GenerationType::HydroRunOfRiver,
    GenerationType::FossilHardCoal,
    GenerationType::FossilGas,
    GenerationType::FossilOil,
    GenerationType::Nuclear,
    GenerationType::Other,
    GenerationType::WindOnshore,
    GenerationType::WindOffshore,
    GenerationType::Solar,
];

/// Public connector type backed by [`ElexonClient`].
pub struct ElexonConnector {
    client: ElexonClient,
}

impl ElexonConnector {
    /// Static connector key for diagnostics.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Build with a default client against api.bmreports.com.
    ///
    /// # Errors
    /// Propagates client construction failures (a missing API key included).
    pub fn new_with_key(api_key: impl Into<String>) -> Result<Self, StromError> {
        Ok(Self {
            client: ElexonClient::builder().api_key(api_key).build()?,
        })
    }

    /// Build from an existing client (custom base URL, timeout).
    #[must_use]
    pub const fn new_with_client(client: ElexonClient) -> Self {
        Self { client }
    }

    fn day_spec() -> WindowSpec {
        WindowSpec {
            resolution: Resolution::HalfHour,
            // One settlement day; 25 h covers the fall-back day.
            max_span: Duration::hours(25),
            reporting_tz: London,
            alignment: WindowAlignment::CivilDay,
        }
    }

    /// Settlement date and its civil midnight for the window.
    fn settlement_day(window: &RequestWindow) -> (NaiveDate, DateTime<Utc>) {
        let date = window.start.with_timezone(&London).date_naive();
        (date, civil_midnight(date, London))
    }

    fn period_instant(day_start: DateTime<Utc>, period: u32) -> DateTime<Utc> {
        day_start + Duration::minutes(30 * i64::from(period - 1))
    }

    fn ensure_gb(region: Region, capability: &str) -> Result<(), StromError> {
        if region == Region::GreatBritain {
            Ok(())
        } else {
            Err(StromError::unsupported(format!("{capability}/{region}")))
        }
    }
}

#[async_trait]
impl GenerationByTypeProvider for ElexonConnector {
    fn generation_window_spec(&self, _region: Region) -> WindowSpec {
        Self::day_spec()
    }

    async fn generation_by_type(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<Vec<TypedBatch>, StromError> {
        Self::ensure_gb(region, "generation-by-type")?;
        let (date, day_start) = Self::settlement_day(window);
        let body = self.client.settlement_csv("B1620", date).await?;
        let table = SettlementRows::parse(&body)?;
        let period_col = table.column("Settlement Period")?;
        // Double space as published by the report.
        let type_col = table.column("Power System Resource  Type")?;
        let quantity_col = table.column("Quantity")?;

        let mut out = Vec::with_capacity(GB_GENERATION_TYPES.len());
        for &kind in GB_GENERATION_TYPES {
            let mut rows: Vec<(u32, f64)> = Vec::new();
            for record in table.rows() {
                if record.get(type_col).unwrap_or_default() != kind.label() {
                    continue;
                }
                rows.push((
                    period_cell(record, period_col)?,
                    numeric_cell(record, quantity_col, "Quantity")?,
                ));
            }
            rows.sort_by_key(|&(period, _)| period);
            let points = rows
                .into_iter()
                .map(|(period, value)| Point {
                    ts: Self::period_instant(day_start, period),
                    value,
                })
                .collect();
            out.push(TypedBatch {
                kind,
                direction: Direction::Generation,
                batch: RawBatch::new(points),
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl DemandProvider for ElexonConnector {
    fn demand_window_spec(&self, _region: Region) -> WindowSpec {
        Self::day_spec()
    }

    async fn demand(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        Self::ensure_gb(region, "demand")?;
        let (date, day_start) = Self::settlement_day(window);
        let body = self.client.settlement_csv("B0610", date).await?;
        let table = SettlementRows::parse(&body)?;
        let period_col = table.column("SettlementPeriod")?;
        let quantity_col = table.column("Quantity")?;

        let mut rows: Vec<(u32, f64)> = Vec::new();
        for record in table.rows() {
            rows.push((
                period_cell(record, period_col)?,
                numeric_cell(record, quantity_col, "Quantity")?,
            ));
        }
        rows.sort_by_key(|&(period, _)| period);
        let points = rows
            .into_iter()
            .map(|(period, value)| Point {
                ts: Self::period_instant(day_start, period),
                value,
            })
            .collect();
        Ok(RawBatch::new(points))
    }
}

impl SourceConnector for ElexonConnector {
    fn name(&self) -> &'static str {
        NAME
    }
    fn vendor(&self) -> &'static str {
        "Elexon BMRS"
    }

    fn supports_region(&self, region: Region) -> bool {
        region == Region::GreatBritain
    }

    fn as_generation_by_type_provider(&self) -> Option<&dyn GenerationByTypeProvider> {
        Some(self as &dyn GenerationByTypeProvider)
    }
    fn as_demand_provider(&self) -> Option<&dyn DemandProvider> {
        Some(self as &dyn DemandProvider)
    }
}
