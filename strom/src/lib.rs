//! Strom orchestrates electricity market data downloads across public grid
//! data sources.
//!
//! Overview
//! - Routes requests to connectors that implement the `strom_core`
//!   contracts (SMARD for Germany, Elexon BMRS for Great Britain, EirGrid
//!   for Ireland, or any custom connector).
//! - Plans provider-compliant request windows, fetches them strictly in
//!   order, and assembles the batches into one gap-free series in the
//!   caller's timezone.
//! - All-or-nothing per call: a window failure or a missing instant fails
//!   the call; partial series are never returned.
//!
//! Key behaviors and trade-offs
//! - Routing: each capability is served by the first registered connector
//!   advertising it for the requested region. There is no fallback chain
//!   and no racing: the sources are rate-sensitive and gap detection needs
//!   every window's outcome.
//! - Daylight saving: windows break on civil boundaries of each source's
//!   reporting calendar, so series planned across DST transitions carry the
//!   correct number of instants with no one-hour aliasing.
//! - Availability: requests outside a zone's documented range are rejected
//!   by default, or clipped when configured via
//!   [`StromBuilder::availability_policy`].
//!
//! Examples
//! Building an orchestrator and fetching a week of German prices:
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::TimeZone;
//! use chrono_tz::Europe::Berlin;
//! use strom::{BiddingZone, Strom};
//!
//! let smard = Arc::new(strom_smard::SmardConnector::new_default()?);
//! let strom = Strom::builder().with_connector(smard).build()?;
//!
//! let start = Berlin.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//! let end = Berlin.with_ymd_and_hms(2023, 1, 7, 23, 59, 0).unwrap();
//! let prices = strom.day_ahead_prices(BiddingZone::DeLu, start, end).await?;
//! assert_eq!(prices.len(), 168);
//! ```
//!
//! Multi-zone price panel:
//! ```rust,ignore
//! let report = strom
//!     .prices_panel()
//!     .zones(&[BiddingZone::DeLu, BiddingZone::Fr, BiddingZone::Nl])?
//!     .interval(start, end)
//!     .run()
//!     .await?;
//! if let Some(table) = report.table.as_ref() {
//!     let fr = table.column("FR");
//! }
//! ```
//!
//! See `strom/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Strom, StromBuilder};
pub use router::panel::{PanelReport, PricesPanelBuilder};

// Re-export core types for convenience
pub use strom_core::{
    // Engine surface
    Column,
    Point,
    RawBatch,
    RequestWindow,
    SourceConnector,
    TimeSeries,
    WideTable,
    WindowAlignment,
    WindowSpec,
    assemble,
    nett,
    pivot,
    plan_windows,

    // Foundational types
    AvailabilityPolicy,
    BiddingZone,
    Border,
    Capability,
    ConnectorKey,
    ControlArea,
    Direction,
    FlowDirection,
    GenerationType,
    PowerPlantUnit,
    Region,
    Resolution,
    StromConfig,
    StromError,
};
