use core::fmt;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Fixed spacing between consecutive points of a series.
///
/// The three public sources publish at quarter-hour, half-hour, and hour
/// cadence; nothing finer or coarser appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    /// 15-minute spacing (SMARD generation/demand, EirGrid).
    QuarterHour,
    /// 30-minute spacing (BMRS settlement periods).
    HalfHour,
    /// 60-minute spacing (SMARD day-ahead prices).
    Hour,
}

impl Resolution {
    /// Spacing in minutes.
    #[must_use]
    pub const fn minutes(self) -> i64 {
        match self {
            Self::QuarterHour => 15,
            Self::HalfHour => 30,
            Self::Hour => 60,
        }
    }

    /// Spacing in seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.minutes() * 60
    }

    /// Spacing as a `chrono::Duration`.
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::minutes(self.minutes())
    }

    /// Short identifier used in logs and provider URL tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuarterHour => "15m",
            Self::HalfHour => "30m",
            Self::Hour => "60m",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
