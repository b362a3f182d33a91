//! strom-core
//!
//! Core types, traits, and the time-series engine shared across the strom
//! ecosystem.
//!
//! - `connector`: the `SourceConnector` trait and capability provider traits.
//! - `series`: UTC-anchored `TimeSeries` and `WideTable` containers.
//! - `timeseries`: planner, assembler, and aggregation.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Connector role traits are `async_trait` contracts and assume the Tokio
//! ecosystem as the async runtime. The engine itself is strictly sequential:
//! orchestrators await one window at a time, in window order, because gap
//! detection requires knowing the outcome of each window and the public
//! sources are not guaranteed to tolerate concurrent bursts.
#![warn(missing_docs)]

/// Connector capability traits and the primary `SourceConnector` interface.
pub mod connector;
/// Series containers returned to callers.
pub mod series;
/// Planner, assembler, and aggregation.
pub mod timeseries;
pub mod types;

pub use connector::{
    CrossBorderFlowsProvider, DayAheadPricesProvider, DemandProvider, DirectedBatch,
    GenerationByTypeProvider, GenerationByUnitProvider, RawBatch, RequestWindow, SourceConnector,
    TypedBatch, UnitBatch, WindowAlignment, WindowSpec,
};
pub use series::{Column, Point, TimeSeries, WideTable};
pub use timeseries::aggregate::{nett, pivot};
pub use timeseries::assemble::assemble;
pub use timeseries::planner::{civil_midnight, plan_windows};
pub use types::*;
