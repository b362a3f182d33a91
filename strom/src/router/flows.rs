use chrono::DateTime;
use chrono_tz::Tz;

use crate::Strom;
use crate::router::{resolve_provider, validate_interval};
use strom_core::{RawBatch, WideTable, assemble, pivot, plan_windows};
use strom_types::{Border, Capability, FlowDirection, StromError};

impl Strom {
    /// Download cross-border interconnector flows over `[start, end)` as a
    /// wide table with one column per direction ("GB > IE", "IE > GB").
    ///
    /// # Errors
    /// `Unsupported` when no registered connector serves the border, plus
    /// the fetch/assembly errors of the engine.
    pub async fn cross_border_flows(
        &self,
        border: Border,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<WideTable, StromError> {
        let (start_utc, end_utc, caller_tz) = validate_interval(&start, &end)?;
        let (name, provider) = resolve_provider!(
            self,
            as_cross_border_flows_provider,
            Capability::CrossBorderFlows
        )?;

        let spec = provider.flow_window_spec(border);
        let windows = plan_windows(start_utc, end_utc, &spec)?;
        tracing::debug!(%border, windows = windows.len(), connector = name, "fetching cross-border flows");

        let mut acc: Vec<(FlowDirection, Vec<RawBatch>)> = Vec::new();
        for window in &windows {
            let directed = Self::provider_call_with_timeout(
                name,
                Capability::CrossBorderFlows,
                self.cfg.provider_timeout,
                provider.cross_border_flows(border, window),
            )
            .await?;
            for db in directed {
                match acc.iter_mut().find(|(d, _)| *d == db.direction) {
                    Some((_, batches)) => batches.push(db.batch),
                    None => acc.push((db.direction, vec![db.batch])),
                }
            }
        }

        let mut columns = Vec::with_capacity(acc.len());
        for (direction, batches) in acc {
            let series = assemble(name, batches, start_utc, end_utc, spec.resolution, caller_tz)?;
            columns.push((direction.label().to_string(), series));
        }
        pivot(columns)
    }
}
