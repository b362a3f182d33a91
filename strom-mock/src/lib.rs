//! Mock connector for CI-safe examples and router tests. Serves
//! deterministic synthetic series and supports forced failures and gap
//! injection.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Europe::Berlin;

use strom_core::connector::{
    CrossBorderFlowsProvider, DayAheadPricesProvider, DemandProvider, DirectedBatch,
    GenerationByTypeProvider, GenerationByUnitProvider, RawBatch, RequestWindow, SourceConnector,
    TypedBatch, UnitBatch, WindowAlignment, WindowSpec,
};
use strom_core::Point;
use strom_types::{
    BiddingZone, Border, Capability, Direction, FlowDirection, GenerationType, PowerPlantUnit,
    Region, Resolution, StromError,
};

/// Mock connector with deterministic data.
#[derive(Debug, Default)]
pub struct MockConnector {
    fail: Option<Capability>,
    missing: Vec<DateTime<Utc>>,
}

impl MockConnector {
    /// Connector that serves every capability without faults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fail: None,
            missing: Vec::new(),
        }
    }

    /// Connector whose fetches for the given capability always fail.
    #[must_use]
    pub const fn failing(capability: Capability) -> Self {
        Self {
            fail: Some(capability),
            missing: Vec::new(),
        }
    }

    /// Connector that omits the given instants from every batch, driving
    /// gap-detection paths.
    #[must_use]
    pub const fn with_missing(missing: Vec<DateTime<Utc>>) -> Self {
        Self {
            fail: None,
            missing,
        }
    }

    /// Deterministic value at an instant: the quarter-hour slot number
    /// within its day.
    #[must_use]
    pub fn value_at(ts: DateTime<Utc>) -> f64 {
        ((ts.timestamp() / 900) % 96) as f64
    }

    fn check_fail(&self, capability: Capability) -> Result<(), StromError> {
        if self.fail == Some(capability) {
            return Err(StromError::source(
                "strom-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }

    /// Full grid of the window, one extra record at the window end so
    /// adjacent windows overlap on their shared boundary instant.
    fn window_batch(&self, window: &RequestWindow, offset: f64) -> RawBatch {
        let step = Duration::seconds(window.resolution.seconds());
        let mut points = Vec::new();
        let mut cur = window.start;
        while cur <= window.end {
            if !self.missing.contains(&cur) {
                points.push(Point {
                    ts: cur,
                    value: offset + Self::value_at(cur),
                });
            }
            cur += step;
        }
        RawBatch::new(points)
    }

    fn price_spec() -> WindowSpec {
        WindowSpec {
            resolution: Resolution::Hour,
            max_span: Duration::days(7),
            reporting_tz: Berlin,
            alignment: WindowAlignment::Span,
        }
    }

    fn daily_spec() -> WindowSpec {
        WindowSpec {
            resolution: Resolution::QuarterHour,
            max_span: Duration::hours(25),
            reporting_tz: Berlin,
            alignment: WindowAlignment::CivilDay,
        }
    }
}

#[async_trait]
impl DayAheadPricesProvider for MockConnector {
    fn price_window_spec(&self, _zone: BiddingZone) -> WindowSpec {
        Self::price_spec()
    }

    async fn day_ahead_prices(
        &self,
        _zone: BiddingZone,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        self.check_fail(Capability::DayAheadPrices)?;
        Ok(self.window_batch(window, 50.0))
    }
}

#[async_trait]
impl GenerationByTypeProvider for MockConnector {
    fn generation_window_spec(&self, _region: Region) -> WindowSpec {
        Self::daily_spec()
    }

    async fn generation_by_type(
        &self,
        _region: Region,
        window: &RequestWindow,
    ) -> Result<Vec<TypedBatch>, StromError> {
        self.check_fail(Capability::GenerationByType)?;
        Ok(vec![
            TypedBatch {
                kind: GenerationType::Solar,
                direction: Direction::Generation,
                batch: self.window_batch(window, 0.0),
            },
            TypedBatch {
                kind: GenerationType::HydroPumpedStorage,
                direction: Direction::Generation,
                batch: self.window_batch(window, 100.0),
            },
            TypedBatch {
                kind: GenerationType::HydroPumpedStorage,
                direction: Direction::Consumption,
                batch: self.window_batch(window, 40.0),
            },
        ])
    }
}

#[async_trait]
impl GenerationByUnitProvider for MockConnector {
    fn unit_window_spec(&self) -> WindowSpec {
        Self::daily_spec()
    }

    async fn generation_by_unit(
        &self,
        units: &[PowerPlantUnit],
        window: &RequestWindow,
    ) -> Result<Vec<UnitBatch>, StromError> {
        self.check_fail(Capability::GenerationByUnit)?;
        Ok(units
            .iter()
            .map(|unit| UnitBatch {
                unit: unit.clone(),
                batch: self.window_batch(window, unit.capacity_mw),
            })
            .collect())
    }
}

#[async_trait]
impl DemandProvider for MockConnector {
    fn demand_window_spec(&self, _region: Region) -> WindowSpec {
        Self::daily_spec()
    }

    async fn demand(
        &self,
        _region: Region,
        window: &RequestWindow,
    ) -> Result<RawBatch, StromError> {
        self.check_fail(Capability::Demand)?;
        Ok(self.window_batch(window, 40_000.0))
    }
}

#[async_trait]
impl CrossBorderFlowsProvider for MockConnector {
    fn flow_window_spec(&self, _border: Border) -> WindowSpec {
        Self::daily_spec()
    }

    async fn cross_border_flows(
        &self,
        _border: Border,
        window: &RequestWindow,
    ) -> Result<Vec<DirectedBatch>, StromError> {
        self.check_fail(Capability::CrossBorderFlows)?;
        Ok(vec![
            DirectedBatch {
                direction: FlowDirection::GbToIe,
                batch: self.window_batch(window, 200.0),
            },
            DirectedBatch {
                direction: FlowDirection::IeToGb,
                batch: self.window_batch(window, 0.0),
            },
        ])
    }
}

impl SourceConnector for MockConnector {
    fn name(&self) -> &'static str {
        "strom-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_region(&self, _region: Region) -> bool {
        true
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
    fn as_cross_border_flows_provider(&self) -> Option<&dyn CrossBorderFlowsProvider> {
        Some(self as &dyn CrossBorderFlowsProvider)
    }
}
