//! Connector role traits and the primary `SourceConnector` interface.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc, Weekday};
use chrono_tz::Tz;

use crate::series::Point;
pub use strom_types::ConnectorKey;
use strom_types::{
    BiddingZone, Border, Direction, FlowDirection, GenerationType, PowerPlantUnit, Region,
    Resolution, StromError,
};

/// How a source pages its data: either plain max-span stepping, or chunks
/// that break on civil-calendar boundaries in the source's reporting zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAlignment {
    /// Step from the interval start in increments of `max_span`.
    Span,
    /// Break on civil midnights (one page per settlement/civil day).
    CivilDay,
    /// Break on civil midnights of the given weekday (one page per week).
    CivilWeek(Weekday),
}

/// Per-source pagination contract: native resolution, maximum request span,
/// the civil timezone of record, and the paging alignment.
///
/// `max_span` must cover the DST-long alignment unit (a 25 h day, a 169 h
/// week); the planner rejects specs that cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    /// Native timestamp resolution of the endpoint.
    pub resolution: Resolution,
    /// Maximum span one request may cover.
    pub max_span: Duration,
    /// Civil timezone the source reports in.
    pub reporting_tz: Tz,
    /// Paging alignment rule.
    pub alignment: WindowAlignment,
}

/// One provider-compliant request window. Created by the planner, consumed
/// once by a connector, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestWindow {
    /// Window start (inclusive), UTC, on a resolution boundary.
    pub start: DateTime<Utc>,
    /// Window end (exclusive), UTC.
    pub end: DateTime<Utc>,
    /// Resolution the window was planned for.
    pub resolution: Resolution,
}

impl RequestWindow {
    /// Window span.
    #[must_use]
    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// Unvalidated records returned by one connector call for one window, in
/// provider order. May extend beyond the window when the source pages in
/// larger civil units; the assembler clips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBatch {
    /// Decoded (instant, value) records.
    pub points: Vec<Point>,
}

impl RawBatch {
    /// Wrap a decoded record list.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// A raw batch labeled with its generation type and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedBatch {
    /// Fuel/technology type of the series.
    pub kind: GenerationType,
    /// Output or consumption.
    pub direction: Direction,
    /// The records.
    pub batch: RawBatch,
}

/// A raw batch labeled with the generating unit it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitBatch {
    /// The unit the records belong to.
    pub unit: PowerPlantUnit,
    /// The records.
    pub batch: RawBatch,
}

/// A raw batch labeled with its flow direction.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedBatch {
    /// Direction of the interconnector flow.
    pub direction: FlowDirection,
    /// The records.
    pub batch: RawBatch,
}

/// Focused role trait for connectors that publish day-ahead prices.
#[async_trait]
pub trait DayAheadPricesProvider: Send + Sync {
    /// Pagination contract for price requests against the given zone.
    fn price_window_spec(&self, zone: BiddingZone) -> WindowSpec;

    /// Fetch raw price records for one window. Performs exactly one page
    /// fetch; no reordering, no filtering, no retries.
    async fn day_ahead_prices(
        &self,
        zone: BiddingZone,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError>;
}

/// Focused role trait for connectors that publish per-type generation.
#[async_trait]
pub trait GenerationByTypeProvider: Send + Sync {
    /// Pagination contract for per-type generation in the given region.
    fn generation_window_spec(&self, region: Region) -> WindowSpec;

    /// Fetch raw per-type generation records for one window, one labeled
    /// batch per (type, direction) series the source publishes.
    async fn generation_by_type(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<Vec<TypedBatch>, StromError>;
}

/// Focused role trait for connectors that publish per-unit generation.
#[async_trait]
pub trait GenerationByUnitProvider: Send + Sync {
    /// Pagination contract for per-unit generation requests.
    fn unit_window_spec(&self) -> WindowSpec;

    /// Fetch raw generation records for the given units over one window.
    async fn generation_by_unit(
        &self,
        units: &[PowerPlantUnit],
        window: &RequestWindow,
    ) -> Result<Vec<UnitBatch>, StromError>;
}

/// Focused role trait for connectors that publish demand (actual load).
#[async_trait]
pub trait DemandProvider: Send + Sync {
    /// Pagination contract for demand requests in the given region.
    fn demand_window_spec(&self, region: Region) -> WindowSpec;

    /// Fetch raw demand records for one window.
    async fn demand(
        &self,
        region: Region,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError>;
}

/// Focused role trait for connectors that publish interconnector flows.
#[async_trait]
pub trait CrossBorderFlowsProvider: Send + Sync {
    /// Pagination contract for flow requests across the given border.
    fn flow_window_spec(&self, border: Border) -> WindowSpec;

    /// Fetch raw flow records for one window, one labeled batch per
    /// direction.
    async fn cross_border_flows(
        &self,
        border: Border,
        window: &RequestWindow,
    ) -> Result<Vec<DirectedBatch>, StromError>;
}

/// Main connector trait implemented by source crates. Exposes capability
/// discovery via `as_*_provider` accessors.
pub trait SourceConnector: Send + Sync {
    /// A stable identifier used in error tags and logs (e.g. "strom-smard").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector serves series for the given region.
    ///
    /// Default: `false` for all regions. Connectors must explicitly override
    /// this to declare their footprint.
    fn supports_region(&self, region: Region) -> bool {
        let _ = region;
        false
    }

    /// Advertise day-ahead price capability.
    fn as_day_ahead_prices_provider(&self) -> Option<&dyn DayAheadPricesProvider> {
        None
    }

    /// Advertise per-type generation capability.
    fn as_generation_by_type_provider(&self) -> Option<&dyn GenerationByTypeProvider> {
        None
    }

    /// Advertise per-unit generation capability.
    fn as_generation_by_unit_provider(&self) -> Option<&dyn GenerationByUnitProvider> {
        None
    }

    /// Advertise demand capability.
    fn as_demand_provider(&self) -> Option<&dyn DemandProvider> {
        None
    }

    /// Advertise cross-border flow capability.
    fn as_cross_border_flows_provider(&self) -> Option<&dyn CrossBorderFlowsProvider> {
        None
    }
}
