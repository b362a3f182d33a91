use chrono::{DateTime, Utc};
use chrono_tz::Europe::Berlin;
use chrono_tz::Tz;

use crate::Strom;
use crate::router::{resolve_provider, validate_interval};
use strom_core::{TimeSeries, assemble, civil_midnight, plan_windows};
use strom_types::{AvailabilityPolicy, BiddingZone, Capability, StromError};

impl Strom {
    /// Download the day-ahead price series for one bidding zone over
    /// `[start, end)`, returned gap-free in the timezone of `start`.
    ///
    /// # Errors
    /// `InvalidRange` for malformed or out-of-availability intervals,
    /// `Unsupported` when no registered connector serves prices, and the
    /// fetch/assembly errors of the engine. A failed call returns no data.
    pub async fn day_ahead_prices(
        &self,
        zone: BiddingZone,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<TimeSeries, StromError> {
        let (start_utc, end_utc, caller_tz) = validate_interval(&start, &end)?;
        let (start_utc, end_utc) = self.apply_availability(zone, start_utc, end_utc)?;
        let (name, provider) =
            resolve_provider!(self, as_day_ahead_prices_provider, Capability::DayAheadPrices)?;

        let spec = provider.price_window_spec(zone);
        let windows = plan_windows(start_utc, end_utc, &spec)?;
        tracing::debug!(%zone, windows = windows.len(), connector = name, "fetching day-ahead prices");

        let mut batches = Vec::with_capacity(windows.len());
        for window in &windows {
            let batch = Self::provider_call_with_timeout(
                name,
                Capability::DayAheadPrices,
                self.cfg.provider_timeout,
                provider.day_ahead_prices(zone, window),
            )
            .await?;
            batches.push(batch);
        }
        assemble(name, batches, start_utc, end_utc, spec.resolution, caller_tz)
    }

    /// Intersect the interval with the zone's documented availability,
    /// honoring the configured policy. Availability dates are civil dates in
    /// the portal's calendar (Europe/Berlin).
    fn apply_availability(
        &self,
        zone: BiddingZone,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), StromError> {
        let from = civil_midnight(zone.available_from(), Berlin);
        let until = zone.available_until().map(|d| {
            civil_midnight(d.succ_opt().expect("date within chrono range"), Berlin)
        });
        match self.cfg.availability {
            AvailabilityPolicy::Reject => {
                if start < from {
                    return Err(StromError::invalid_range(format!(
                        "{zone} prices are published from {} only",
                        zone.available_from()
                    )));
                }
                if let Some(until) = until {
                    if end > until {
                        return Err(StromError::invalid_range(format!(
                            "{zone} prices end on {}",
                            zone.available_until().expect("checked above")
                        )));
                    }
                }
                Ok((start, end))
            }
            AvailabilityPolicy::Clip => {
                let clipped_start = start.max(from);
                let clipped_end = until.map_or(end, |u| end.min(u));
                if clipped_start >= clipped_end {
                    return Err(StromError::invalid_range(format!(
                        "interval lies entirely outside the published range of {zone}"
                    )));
                }
                Ok((clipped_start, clipped_end))
            }
            // `AvailabilityPolicy` is `#[non_exhaustive]`; both documented
            // policies are handled above.
            _ => unreachable!("unknown AvailabilityPolicy variant"),
        }
    }
}
