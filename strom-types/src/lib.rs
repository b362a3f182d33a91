//! Shared vocabulary and configuration primitives for the strom ecosystem.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod generation;
mod plant;
mod region;
mod resolution;

pub use capability::Capability;
pub use config::{AvailabilityPolicy, StromConfig};
pub use connector::ConnectorKey;
pub use error::StromError;
pub use generation::{Direction, GenerationType};
pub use plant::{ControlArea, PowerPlantUnit};
pub use region::{BiddingZone, Border, FlowDirection, Region};
pub use resolution::Resolution;
