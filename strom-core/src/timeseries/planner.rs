//! Maps a caller interval onto provider-compliant request windows.

use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};
use chrono::{Datelike, LocalResult, TimeZone};
use chrono_tz::Tz;

use crate::connector::{RequestWindow, WindowAlignment, WindowSpec};
use crate::timeseries::util::ceil_to_resolution;
use strom_types::StromError;

/// Plan an ordered sequence of non-overlapping, contiguous request windows
/// tiling `[start, end)` under the source's pagination contract.
///
/// The caller start is rounded up to the next resolution boundary; windows
/// break on the spec's civil boundaries in the source's reporting zone, so a
/// window never straddles a provider page. Daylight-saving transitions are
/// absorbed here: a civil week or day maps to however many UTC instants the
/// source's civil calendar actually contains.
///
/// # Errors
/// - `InvalidRange` when `start >= end` or no grid instant falls inside the
///   interval.
/// - `InvalidArg` when `max_span` cannot cover the spec's alignment unit.
pub fn plan_windows(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    spec: &WindowSpec,
) -> Result<Vec<RequestWindow>, StromError> {
    if start >= end {
        return Err(StromError::invalid_range(format!(
            "start {start} is not before end {end}"
        )));
    }
    let aligned = ceil_to_resolution(start, spec.resolution);
    if aligned >= end {
        return Err(StromError::invalid_range(format!(
            "no {} instant inside [{start}, {end})",
            spec.resolution
        )));
    }

    let mut windows = Vec::new();
    let mut cur = aligned;
    while cur < end {
        let boundary = match spec.alignment {
            WindowAlignment::Span => cur + spec.max_span,
            WindowAlignment::CivilDay => next_civil_day(cur, spec.reporting_tz),
            WindowAlignment::CivilWeek(weekday) => {
                next_civil_week(cur, spec.reporting_tz, weekday)
            }
        };
        let window_end = boundary.min(end);
        if window_end - cur > spec.max_span {
            return Err(StromError::InvalidArg(format!(
                "max_span {} cannot cover one {:?} unit starting at {cur}",
                spec.max_span, spec.alignment
            )));
        }
        windows.push(RequestWindow {
            start: cur,
            end: window_end,
            resolution: spec.resolution,
        });
        cur = window_end;
    }

    tracing::debug!(
        windows = windows.len(),
        resolution = %spec.resolution,
        "planned request windows"
    );
    Ok(windows)
}

/// UTC instant of civil midnight on `date` in `tz`.
///
/// Ambiguous midnights resolve to the earlier instant; a midnight erased by
/// a DST jump resolves to the first existing instant of the day.
pub fn civil_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let mut naive = date.and_hms_opt(0, 0, 0).expect("midnight exists");
    loop {
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                return dt.with_timezone(&Utc);
            }
            LocalResult::None => {
                naive += Duration::minutes(15);
            }
        }
    }
}

fn next_civil_day(cur: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let date = cur.with_timezone(&tz).date_naive();
    let next = date.succ_opt().expect("date within chrono range");
    civil_midnight(next, tz)
}

fn next_civil_week(cur: DateTime<Utc>, tz: Tz, weekday: Weekday) -> DateTime<Utc> {
    let date = cur.with_timezone(&tz).date_naive();
    let ahead = i64::from(
        (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7,
    );
    let mut candidate = date + Duration::days(ahead);
    let mut boundary = civil_midnight(candidate, tz);
    if boundary <= cur {
        candidate += Duration::days(7);
        boundary = civil_midnight(candidate, tz);
    }
    boundary
}
