//! Re-export of foundational types from `strom-types`.
// Consolidated re-exports so downstream crates can depend on `strom-core` only

pub use strom_types::{
    AvailabilityPolicy, BiddingZone, Border, Capability, ConnectorKey, ControlArea, Direction,
    FlowDirection, GenerationType, PowerPlantUnit, Region, Resolution, StromConfig, StromError,
};
