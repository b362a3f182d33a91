//! Static SMARD table identifiers.
//!
//! The portal keys every series by a numeric table id; these mappings are
//! provider constants, not caller-facing vocabulary.

use strom_types::{BiddingZone, Direction, GenerationType};

/// Chart-data table id of the day-ahead price series for a zone.
#[must_use]
pub const fn zone_table_id(zone: BiddingZone) -> &'static str {
    match zone {
        BiddingZone::DeLu => "4169",
        BiddingZone::DeAtLu => "251",
        BiddingZone::DeLuNeighbors => "5078",
        BiddingZone::At => "4170",
        BiddingZone::Be => "4996",
        BiddingZone::Ch => "259",
        BiddingZone::Cz => "261",
        BiddingZone::Dk1 => "252",
        BiddingZone::Dk2 => "253",
        BiddingZone::Fr => "254",
        BiddingZone::Hu => "262",
        BiddingZone::ItNorth => "255",
        BiddingZone::Nl => "256",
        BiddingZone::No2 => "4997",
        BiddingZone::Pl => "257",
        BiddingZone::Se4 => "258",
        BiddingZone::Si => "260",
        // `BiddingZone` is `#[non_exhaustive]`, so a downstream crate must
        // supply a wildcard. Every known zone is mapped above.
        _ => unreachable!(),
    }
}

/// Per-type generation tables published for Germany. Pumped storage is the
/// only type with a separate consumption series.
pub const DE_GENERATION_TABLES: &[(GenerationType, Direction, &str)] = &[
    (GenerationType::Biomass, Direction::Generation, "4066"),
    (GenerationType::FossilBrownCoal, Direction::Generation, "1223"),
    (GenerationType::FossilGas, Direction::Generation, "4071"),
    (GenerationType::FossilHardCoal, Direction::Generation, "4069"),
    (GenerationType::FossilOil, Direction::Generation, "115"),
    (GenerationType::Geothermal, Direction::Generation, "105"),
    (GenerationType::HydroPumpedStorage, Direction::Generation, "4070"),
    (GenerationType::HydroPumpedStorage, Direction::Consumption, "4387"),
    (GenerationType::HydroRunOfRiver, Direction::Generation, "104"),
    (GenerationType::HydroReservoir, Direction::Generation, "118"),
    (GenerationType::Nuclear, Direction::Generation, "1224"),
    (GenerationType::Other, Direction::Generation, "119"),
    (GenerationType::OtherRenewable, Direction::Generation, "107"),
    (GenerationType::Solar, Direction::Generation, "4068"),
    (GenerationType::Waste, Direction::Generation, "120"),
    (GenerationType::WindOffshore, Direction::Generation, "1225"),
    (GenerationType::WindOnshore, Direction::Generation, "4067"),
];

/// Table id of the German actual-load series.
pub const DE_DEMAND_TABLE: &str = "410";
