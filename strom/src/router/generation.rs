use chrono::DateTime;
use chrono_tz::Tz;

use crate::Strom;
use crate::router::{resolve_provider, validate_interval};
use strom_core::{RawBatch, TimeSeries, WideTable, assemble, nett, pivot, plan_windows};
use strom_types::{
    Capability, Direction, GenerationType, PowerPlantUnit, Region, StromError,
};

impl Strom {
    /// Download per-type generation for a region over `[start, end)` as a
    /// wide table, one column per published (type, direction) series.
    /// Consumption columns are suffixed "(consumption)".
    ///
    /// # Errors
    /// `Unsupported` when no registered connector serves the region, plus
    /// the fetch/assembly errors of the engine.
    pub async fn generation_by_type(
        &self,
        region: Region,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<WideTable, StromError> {
        let typed = self.collect_generation(region, &start, &end).await?;
        let columns = typed
            .into_iter()
            .map(|(kind, direction, series)| {
                let label = match direction {
                    Direction::Generation => kind.label().to_string(),
                    Direction::Consumption => format!("{} (consumption)", kind.label()),
                };
                (label, series)
            })
            .collect();
        pivot(columns)
    }

    /// Download per-type generation with nett aggregation: paired
    /// generation/consumption series collapse into one signed net series
    /// per type.
    ///
    /// # Errors
    /// As [`Strom::generation_by_type`], plus `GroupMismatch` when paired
    /// series disagree on coverage.
    pub async fn generation_by_type_nett(
        &self,
        region: Region,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<WideTable, StromError> {
        let typed = self.collect_generation(region, &start, &end).await?;
        let netted = nett(typed)?;
        let columns = netted
            .into_iter()
            .map(|(kind, series)| (kind.label().to_string(), series))
            .collect();
        pivot(columns)
    }

    /// Download per-unit generation for the given units over `[start, end)`
    /// as a wide table, one column per unit.
    ///
    /// The unit list is boundary reference data; callers select the units
    /// (and their active years) themselves. Every requested unit must cover
    /// the full interval; partial coverage fails the call.
    ///
    /// # Errors
    /// `InvalidArg` for an empty or duplicated unit list, `Unsupported`
    /// when no registered connector serves per-unit data, plus the
    /// fetch/assembly errors of the engine.
    pub async fn generation_by_unit(
        &self,
        units: &[PowerPlantUnit],
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<WideTable, StromError> {
        if units.is_empty() {
            return Err(StromError::InvalidArg(
                "no units specified for per-unit download".into(),
            ));
        }
        for (i, unit) in units.iter().enumerate() {
            if units[..i].iter().any(|u| u.api_id == unit.api_id) {
                return Err(StromError::InvalidArg(format!(
                    "duplicate unit '{}' in units list",
                    unit.api_id
                )));
            }
        }

        let (start_utc, end_utc, caller_tz) = validate_interval(&start, &end)?;
        let (name, provider) = resolve_provider!(
            self,
            as_generation_by_unit_provider,
            Capability::GenerationByUnit
        )?;
        let spec = provider.unit_window_spec();
        let windows = plan_windows(start_utc, end_utc, &spec)?;
        tracing::debug!(units = units.len(), windows = windows.len(), connector = name, "fetching per-unit generation");

        let mut acc: Vec<(PowerPlantUnit, Vec<RawBatch>)> = Vec::new();
        for window in &windows {
            let unit_batches = Self::provider_call_with_timeout(
                name,
                Capability::GenerationByUnit,
                self.cfg.provider_timeout,
                provider.generation_by_unit(units, window),
            )
            .await?;
            for ub in unit_batches {
                match acc.iter_mut().find(|(u, _)| u.api_id == ub.unit.api_id) {
                    Some((_, batches)) => batches.push(ub.batch),
                    None => acc.push((ub.unit, vec![ub.batch])),
                }
            }
        }

        let mut columns = Vec::with_capacity(acc.len());
        for (unit, batches) in acc {
            let series = assemble(name, batches, start_utc, end_utc, spec.resolution, caller_tz)?;
            columns.push((unit.column_label(), series));
        }
        pivot(columns)
    }

    /// Fetch and assemble every (type, direction) series the region's
    /// connector publishes, sequential in window order.
    async fn collect_generation(
        &self,
        region: Region,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<(GenerationType, Direction, TimeSeries)>, StromError> {
        let (start_utc, end_utc, caller_tz) = validate_interval(start, end)?;
        let (name, provider) = resolve_provider!(
            self,
            as_generation_by_type_provider,
            Capability::GenerationByType,
            region
        )?;
        let spec = provider.generation_window_spec(region);
        let windows = plan_windows(start_utc, end_utc, &spec)?;
        tracing::debug!(%region, windows = windows.len(), connector = name, "fetching per-type generation");

        let mut acc: Vec<((GenerationType, Direction), Vec<RawBatch>)> = Vec::new();
        for window in &windows {
            let typed = Self::provider_call_with_timeout(
                name,
                Capability::GenerationByType,
                self.cfg.provider_timeout,
                provider.generation_by_type(region, window),
            )
            .await?;
            for tb in typed {
                let key = (tb.kind, tb.direction);
                match acc.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, batches)) => batches.push(tb.batch),
                    None => acc.push((key, vec![tb.batch])),
                }
            }
        }

        let mut out = Vec::with_capacity(acc.len());
        for ((kind, direction), batches) in acc {
            let series = assemble(name, batches, start_utc, end_utc, spec.resolution, caller_tz)?;
            out.push((kind, direction, series));
        }
        Ok(out)
    }
}
