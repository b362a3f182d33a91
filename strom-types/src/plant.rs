use core::fmt;
use serde::{Deserialize, Serialize};

use crate::GenerationType;

/// German transmission control areas, as SMARD keys per-unit series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlArea {
    /// 50Hertz Transmission.
    FiftyHertz,
    /// Amprion.
    Amprion,
    /// TenneT TSO.
    Tennet,
    /// TransnetBW.
    TransnetBw,
}

impl ControlArea {
    /// Region identifier exactly as it appears in SMARD chart-data URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiftyHertz => "50Hertz",
            Self::Amprion => "Amprion",
            Self::Tennet => "TenneT",
            Self::TransnetBw => "TransnetBW",
        }
    }

    /// Parse a SMARD region identifier.
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "50Hertz" => Some(Self::FiftyHertz),
            "Amprion" => Some(Self::Amprion),
            "TenneT" => Some(Self::Tennet),
            "TransnetBW" => Some(Self::TransnetBw),
            _ => None,
        }
    }
}

impl fmt::Display for ControlArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference record for one power-generating unit.
///
/// Immutable lookup data consumed by per-unit downloads; the core never
/// mutates it. Commissioning/decommissioning years bound the period in
/// which the source publishes data for the unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlantUnit {
    /// EIC code of the block.
    pub eic: String,
    /// SEE identifier, when the block has one.
    pub see: String,
    /// Power plant name.
    pub plant_name: String,
    /// Block name within the plant.
    pub block_name: String,
    /// Operating company.
    pub company: String,
    /// Fuel/technology type.
    pub kind: GenerationType,
    /// Installed capacity in MW.
    pub capacity_mw: f64,
    /// Control area the unit reports into.
    pub control_area: ControlArea,
    /// Per-unit series identifier in the source API.
    pub api_id: String,
    /// Commissioning year, when documented.
    pub commissioned: Option<i32>,
    /// Decommissioning year, when documented.
    pub decommissioned: Option<i32>,
}

impl PowerPlantUnit {
    /// Column label used when pivoting per-unit series into a wide table.
    #[must_use]
    pub fn column_label(&self) -> String {
        format!("{} {}", self.plant_name, self.block_name)
    }

    /// Whether the unit plausibly reports data in the given civil year.
    #[must_use]
    pub fn active_in(&self, year: i32) -> bool {
        if let Some(c) = self.commissioned {
            if c > year + 1 {
                return false;
            }
        }
        if let Some(d) = self.decommissioned {
            if d < year {
                return false;
            }
        }
        true
    }
}
