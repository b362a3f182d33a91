use core::fmt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A market area served by one of the grid data sources.
///
/// `GreatBritain` is the main island including England, Wales and Scotland;
/// `Ireland` is the whole island including Northern Ireland, matching the
/// EirGrid reporting footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Region {
    /// Germany (SMARD footprint).
    Germany,
    /// Great Britain (BMRS footprint).
    GreatBritain,
    /// Island of Ireland (EirGrid footprint).
    Ireland,
}

impl Region {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Germany => "DE",
            Self::GreatBritain => "GB",
            Self::Ireland => "IE",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interconnector border for cross-border flow series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Border {
    /// GB <-> IE, the EWIC and Moyle interconnectors combined.
    GreatBritainIreland,
}

impl Border {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreatBritainIreland => "GB-IE",
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a cross-border flow series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlowDirection {
    /// Export from Great Britain into Ireland.
    GbToIe,
    /// Export from Ireland into Great Britain.
    IeToGb,
}

impl FlowDirection {
    /// Column label as published by the original feeds.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GbToIe => "GB > IE",
            Self::IeToGb => "IE > GB",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bidding zone for which a single day-ahead price series is published.
///
/// Zones are a closed set with documented availability ranges; retired zones
/// (`DeAtLu`) and composite zones (`DeLuNeighbors`, the average over all
/// neighbours of DE_LU) resolve to the same fetch contract as regular zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BiddingZone {
    /// Germany-Luxembourg, successor of DE_AT_LU.
    DeLu,
    /// Germany-Austria-Luxembourg, retired 2018-09-30.
    DeAtLu,
    /// Average of all bidding zones neighbouring DE_LU.
    DeLuNeighbors,
    /// Austria.
    At,
    /// Belgium.
    Be,
    /// Switzerland.
    Ch,
    /// Czechia.
    Cz,
    /// Denmark zone 1 (west).
    Dk1,
    /// Denmark zone 2 (east).
    Dk2,
    /// France.
    Fr,
    /// Hungary.
    Hu,
    /// Italy, northern zone.
    ItNorth,
    /// Netherlands.
    Nl,
    /// Norway zone 2 (south-west).
    No2,
    /// Poland.
    Pl,
    /// Sweden zone 4 (south).
    Se4,
    /// Slovenia.
    Si,
}

impl BiddingZone {
    /// Every known zone, in a stable order.
    pub const ALL: &'static [Self] = &[
        Self::DeLu,
        Self::DeAtLu,
        Self::DeLuNeighbors,
        Self::At,
        Self::Be,
        Self::Ch,
        Self::Cz,
        Self::Dk1,
        Self::Dk2,
        Self::Fr,
        Self::Hu,
        Self::ItNorth,
        Self::Nl,
        Self::No2,
        Self::Pl,
        Self::Se4,
        Self::Si,
    ];

    /// Canonical zone code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DeLu => "DE_LU",
            Self::DeAtLu => "DE_AT_LU",
            Self::DeLuNeighbors => "DE_LU_NEIGHBORS",
            Self::At => "AT",
            Self::Be => "BE",
            Self::Ch => "CH",
            Self::Cz => "CZ",
            Self::Dk1 => "DK_1",
            Self::Dk2 => "DK_2",
            Self::Fr => "FR",
            Self::Hu => "HU",
            Self::ItNorth => "IT_NORTH",
            Self::Nl => "NL",
            Self::No2 => "NO_2",
            Self::Pl => "PL",
            Self::Se4 => "SE_4",
            Self::Si => "SI",
        }
    }

    /// First civil date (Europe/Berlin) with published prices for this zone.
    #[must_use]
    pub fn available_from(self) -> NaiveDate {
        let (y, m, d) = match self {
            Self::DeLu | Self::At => (2018, 10, 1),
            Self::DeLuNeighbors => (2019, 11, 20),
            _ => (2015, 1, 5),
        };
        NaiveDate::from_ymd_opt(y, m, d).expect("static availability date")
    }

    /// Last civil date (Europe/Berlin) with published prices, for retired zones.
    #[must_use]
    pub fn available_until(self) -> Option<NaiveDate> {
        match self {
            Self::DeAtLu => NaiveDate::from_ymd_opt(2018, 9, 30),
            _ => None,
        }
    }

    /// Whether the zone is a composite ("neighbour-average") series rather
    /// than a real market region.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::DeLuNeighbors)
    }
}

impl fmt::Display for BiddingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
