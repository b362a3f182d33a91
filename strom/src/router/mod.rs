//! Per-capability routers over the registered connectors.

pub(crate) mod demand;
pub(crate) mod flows;
pub(crate) mod generation;
pub(crate) mod panel;
pub(crate) mod prices;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use strom_types::StromError;

/// Validate a caller interval and split it into UTC bounds plus the caller's
/// display timezone (taken from `start`).
pub(crate) fn validate_interval(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> Result<(DateTime<Utc>, DateTime<Utc>, Tz), StromError> {
    let start_utc = start.with_timezone(&Utc);
    let end_utc = end.with_timezone(&Utc);
    if start_utc >= end_utc {
        return Err(StromError::invalid_range(format!(
            "start {start} is not before end {end}"
        )));
    }
    Ok((start_utc, end_utc, start.timezone()))
}

/// Resolve the first registered connector advertising a capability (and,
/// with the second form, serving a region), yielding its name and provider
/// trait object.
macro_rules! resolve_provider {
    ($strom:expr, $as_provider:ident, $cap:expr) => {
        $strom
            .connectors
            .iter()
            .find_map(|c| c.$as_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| strom_types::StromError::unsupported($cap.as_str()))
    };
    ($strom:expr, $as_provider:ident, $cap:expr, $region:expr) => {
        $strom
            .connectors
            .iter()
            .filter(|c| c.supports_region($region))
            .find_map(|c| c.$as_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| {
                strom_types::StromError::unsupported(format!("{}/{}", $cap.as_str(), $region))
            })
    };
}
pub(crate) use resolve_provider;
