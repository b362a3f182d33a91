use chrono::DateTime;
use chrono_tz::Tz;

use crate::Strom;
use crate::router::{resolve_provider, validate_interval};
use strom_core::{TimeSeries, assemble, plan_windows};
use strom_types::{Capability, Region, StromError};

impl Strom {
    /// Download the demand (actual load) series for a region over
    /// `[start, end)`, returned gap-free in the timezone of `start`.
    ///
    /// # Errors
    /// `Unsupported` when no registered connector serves the region, plus
    /// the fetch/assembly errors of the engine.
    pub async fn demand(
        &self,
        region: Region,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<TimeSeries, StromError> {
        let (start_utc, end_utc, caller_tz) = validate_interval(&start, &end)?;
        let (name, provider) =
            resolve_provider!(self, as_demand_provider, Capability::Demand, region)?;

        let spec = provider.demand_window_spec(region);
        let windows = plan_windows(start_utc, end_utc, &spec)?;
        tracing::debug!(%region, windows = windows.len(), connector = name, "fetching demand");

        let mut batches = Vec::with_capacity(windows.len());
        for window in &windows {
            let batch = Self::provider_call_with_timeout(
                name,
                Capability::Demand,
                self.cfg.provider_timeout,
                provider.demand(region, window),
            )
            .await?;
            batches.push(batch);
        }
        assemble(name, batches, start_utc, end_utc, spec.resolution, caller_tz)
    }
}
