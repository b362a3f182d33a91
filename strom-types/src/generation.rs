use core::fmt;
use serde::{Deserialize, Serialize};

/// Fuel/technology categories used across all three sources.
///
/// Labels follow the ENTSO-E production type names the sources publish, so
/// wide-table columns line up with the upstream portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GenerationType {
    /// Biomass.
    Biomass,
    /// Fossil brown coal / lignite.
    FossilBrownCoal,
    /// Fossil gas.
    FossilGas,
    /// Fossil hard coal.
    FossilHardCoal,
    /// Fossil oil.
    FossilOil,
    /// Geothermal.
    Geothermal,
    /// Hydro pumped storage.
    HydroPumpedStorage,
    /// Hydro run-of-river and poundage.
    HydroRunOfRiver,
    /// Hydro water reservoir.
    HydroReservoir,
    /// Hydro, not further broken down (plant metadata only).
    Hydro,
    /// Nuclear.
    Nuclear,
    /// Other conventional.
    Other,
    /// Other renewable.
    OtherRenewable,
    /// Solar.
    Solar,
    /// Waste.
    Waste,
    /// Wind offshore.
    WindOffshore,
    /// Wind onshore.
    WindOnshore,
    /// Battery storage (plant metadata only).
    BatteryStorage,
}

impl GenerationType {
    /// ENTSO-E style display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Biomass => "Biomass",
            Self::FossilBrownCoal => "Fossil Brown coal/Lignite",
            Self::FossilGas => "Fossil Gas",
            Self::FossilHardCoal => "Fossil Hard coal",
            Self::FossilOil => "Fossil Oil",
            Self::Geothermal => "Geothermal",
            Self::HydroPumpedStorage => "Hydro Pumped Storage",
            Self::HydroRunOfRiver => "Hydro Run-of-river and poundage",
            Self::HydroReservoir => "Hydro Water Reservoir",
            Self::Hydro => "Hydro",
            Self::Nuclear => "Nuclear",
            Self::Other => "Other",
            Self::OtherRenewable => "Other renewable",
            Self::Solar => "Solar",
            Self::Waste => "Waste",
            Self::WindOffshore => "Wind Offshore",
            Self::WindOnshore => "Wind Onshore",
            Self::BatteryStorage => "Battery Storage",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a generation series measures output or consumption.
///
/// Storage technologies publish both; nett aggregation collapses the pair
/// into one signed series per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Actual aggregated generation output.
    Generation,
    /// Actual consumption (storage charging).
    Consumption,
}

impl Direction {
    /// Stable identifier for logs and column labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::Consumption => "consumption",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
