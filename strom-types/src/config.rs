//! Configuration types shared between the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How requests partly or wholly outside a zone's documented availability
/// range are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AvailabilityPolicy {
    /// Reject the request with an `InvalidRange` error. Nothing is fetched.
    #[default]
    Reject,
    /// Narrow the interval to the documented range; an empty intersection
    /// is still rejected.
    Clip,
}

/// Global configuration for the `Strom` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StromConfig {
    /// Timeout applied to each individual window fetch. A timed-out window
    /// fails the whole call; nothing is retried.
    pub provider_timeout: Duration,
    /// Handling of requests outside documented zone availability.
    pub availability: AvailabilityPolicy,
}

impl Default for StromConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(60),
            availability: AvailabilityPolicy::default(),
        }
    }
}
