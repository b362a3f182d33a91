//! strom-eirgrid
//!
//! Connector for the EirGrid Smart Grid Dashboard. Serves per-type
//! generation and demand for the island of Ireland (Republic plus Northern
//! Ireland) and the GB <-> IE interconnector flows (EWIC and Moyle).
//!
//! The dashboard pages by civil day in Europe/Dublin at quarter-hour
//! cadence. It measures wind and total generation directly; the non-wind
//! residual is split across technologies by fixed shares from the ESB 2022
//! annual report.
#![warn(missing_docs)]

/// HTTP client for the dashboard service.
pub mod client;
/// Civil-day slot arithmetic and positional record mapping.
pub mod slots;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Europe::Dublin;

use client::EirGridClient;
use slots::{day_slots, map_rows};
use strom_core::connector::{
    ConnectorKey, CrossBorderFlowsProvider, DemandProvider, DirectedBatch,
    GenerationByTypeProvider, RawBatch, RequestWindow, SourceConnector, TypedBatch,
    WindowAlignment, WindowSpec,
};
use strom_core::Point;
use strom_types::{Border, Direction, FlowDirection, GenerationType, Region, Resolution, StromError};

const NAME: &str = "strom-eirgrid";

/// Technology shares used to split the non-wind generation residual,
/// according to the ESB 2022 annual report.
pub const IE_TYPE_SHARES: &[(GenerationType, f64)] = &[
    (GenerationType::FossilHardCoal, 0.133_803),
    (GenerationType::FossilGas, 0.715_493),
    (GenerationType::FossilOil, 0.012_676),
    (GenerationType::HydroRunOfRiver, 0.023_944),
    (GenerationType::Biomass, 0.023_944),
    (GenerationType::HydroPumpedStorage, 0.008_451),
    (GenerationType::Other, 0.081_690),
];

/// Public connector type backed by [`EirGridClient`].
pub struct EirGridConnector {
    client: EirGridClient,
}

impl EirGridConnector {
    /// Static connector key for diagnostics.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Build with a default client against smartgriddashboard.com.
    ///
    /// # Errors
    /// Propagates client construction failures.
    pub fn new_default() -> Result<Self, StromError> {
        Ok(Self {
            client: EirGridClient::new_default()?,
        })
    }

    /// Build from an existing client (custom base URL, timeout).
    #[must_use]
    pub const fn new_with_client(client: EirGridClient) -> Self {
        Self { client }
    }

    fn day_spec() -> WindowSpec {
        WindowSpec {
            resolution: Resolution::QuarterHour,
            // One civil day; 25 h covers the fall-back day.
            max_span: Duration::hours(25),
            reporting_tz: Dublin,
            alignment: WindowAlignment::CivilDay,
        }
    }

    fn civil_date(window: &RequestWindow) -> NaiveDate {
        window.start.with_timezone(&Dublin).date_naive()
    }

    async fn area_points(
        &self,
        area: &str,
        date: NaiveDate,
        slot_grid: &[DateTime<Utc>],
    ) -> Result<Vec<Point>, StromError> {
        let rows = self.client.rows(area, date).await?;
        let values: Vec<Option<f64>> = rows.into_iter().map(|r| r.value).collect();
        map_rows(slot_grid, &values)
    }

    fn ensure_ireland(region: Region, capability: &str) -> Result<(), StromError> {
        if region == Region::Ireland {
            Ok(())
        } else {
            Err(StromError::unsupported(format!("{capability}/{region}")))
        }
    }
}

#[async_trait]
impl GenerationByTypeProvider for EirGridConnector {
    fn generation_window_spec(&self, _region: Region) -> WindowSpec {
        Self::day_spec()
    }

    async fn generation_by_type(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<Vec<TypedBatch>, StromError> {
        Self::ensure_ireland(region, "generation-by-type")?;
        let date = Self::civil_date(window);
        let grid = day_slots(date, Dublin);

        let wind = self.area_points("windactual", date, &grid).await?;
        let total = self.area_points("generationactual", date, &grid).await?;

        // Residual = total - wind, computable only where both are observed.
        let wind_by_ts: BTreeMap<DateTime<Utc>, f64> =
            wind.iter().map(|p| (p.ts, p.value)).collect();
        let remaining: Vec<Point> = total
            .iter()
            .filter_map(|p| {
                wind_by_ts.get(&p.ts).map(|w| Point {
                    ts: p.ts,
                    value: p.value - w,
                })
            })
            .collect();

        let mut out = Vec::with_capacity(1 + IE_TYPE_SHARES.len());
        out.push(TypedBatch {
            kind: GenerationType::WindOnshore,
            direction: Direction::Generation,
            batch: RawBatch::new(wind),
        });
        for &(kind, share) in IE_TYPE_SHARES {
            let points = remaining
                .iter()
                .map(|p| Point {
                    ts: p.ts,
                    value: p.value * share,
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
impl DemandProvider for EirGridConnector {
    fn demand_window_spec(&self, _region: Region) -> WindowSpec {
        Self::day_spec()
    }

    async fn demand(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        Self::ensure_ireland(region, "demand")?;
        let date = Self::civil_date(window);
        let grid = day_slots(date, Dublin);
        Ok(RawBatch::new(
            self.area_points("demandactual", date, &grid).await?,
        ))
    }
}

#[async_trait]
impl CrossBorderFlowsProvider for EirGridConnector {
    fn flow_window_spec(&self, _border: Border) -> WindowSpec {
        Self::day_spec()
    }

    async fn cross_border_flows(
        &self,
        border: Border,
        window: &RequestWindow,
    ) -> Result<Vec<DirectedBatch>, StromError> {
        if border != Border::GreatBritainIreland {
            return Err(StromError::unsupported(format!(
                "cross-border-flows/{border}"
            )));
        }
        let date = Self::civil_date(window);
        let grid = day_slots(date, Dublin);

        let rows = self.client.rows("interconnection", date).await?;
        let field_values = |field: &str| -> Vec<Option<f64>> {
            rows.iter()
                .filter(|r| r.field_name.as_deref() == Some(field))
                .map(|r| r.value)
                .collect()
        };
        let ewic = map_rows(&grid, &field_values("INTER_EWIC"))?;
        let moyle = map_rows(&grid, &field_values("INTER_MOYLE"))?;

        // Net flow exists only where both interconnectors are observed.
        let moyle_by_ts: BTreeMap<DateTime<Utc>, f64> =
            moyle.iter().map(|p| (p.ts, p.value)).collect();
        let mut to_ie = Vec::new();
        let mut to_gb = Vec::new();
        for p in &ewic {
            let Some(m) = moyle_by_ts.get(&p.ts) else {
                continue;
            };
            let net = p.value + m;
            to_ie.push(Point {
                ts: p.ts,
                value: net.max(0.0),
            });
            to_gb.push(Point {
                ts: p.ts,
                value: (-net).max(0.0),
            });
        }
        Ok(vec![
            DirectedBatch {
                direction: FlowDirection::GbToIe,
                batch: RawBatch::new(to_ie),
            },
            DirectedBatch {
                direction: FlowDirection::IeToGb,
                batch: RawBatch::new(to_gb),
            },
        ])
    }
}

impl SourceConnector for EirGridConnector {
    fn name(&self) -> &'static str {
        NAME
    }
    fn vendor(&self) -> &'static str {
        "EirGrid Smart Grid Dashboard"
    }

    fn supports_region(&self, region: Region) -> bool {
        region == Region::Ireland
    }

    fn as_generation_by_type_provider(&self) -> Option<&dyn GenerationByTypeProvider> {
        Some(self as &dyn GenerationByTypeProvider)
    }
    fn as_demand_provider(&self) -> Option<&dyn DemandProvider> {
        Some(self as &dyn DemandProvider)
    }
    fn as_cross_border_flows_provider(&self) -> Option<&dyn CrossBorderFlowsProvider> {
        Some(self as &dyn CrossBorderFlowsProvider)
    }
}
