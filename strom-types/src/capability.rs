use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with facade endpoints and allow consistent Display
/// formatting and match-exhaustive handling when adding new capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Day-ahead electricity prices for a bidding zone.
    DayAheadPrices,
    /// Generation broken down by fuel/technology type.
    GenerationByType,
    /// Generation broken down by individual power-generating unit.
    GenerationByUnit,
    /// Electricity demand (actual load).
    Demand,
    /// Cross-border interconnector flows.
    CrossBorderFlows,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DayAheadPrices => "day-ahead-prices",
            Self::GenerationByType => "generation-by-type",
            Self::GenerationByUnit => "generation-by-unit",
            Self::Demand => "demand",
            Self::CrossBorderFlows => "cross-border-flows",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
