//! `TimeUnit`: the units accepted by the generic `checked_add` arithmetic
//! and by interval iteration.

/// A unit of calendar or clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// Microseconds.
    Microseconds,
    /// Milliseconds (1 000 µs).
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl TimeUnit {
    /// Return `true` for units measured on the calendar (days and longer).
    pub fn is_date_unit(&self) -> bool {
        matches!(
            self,
            TimeUnit::Days | TimeUnit::Weeks | TimeUnit::Months | TimeUnit::Years
        )
    }

    /// Length of one unit in microseconds, for units of fixed length.
    ///
    /// Months and years vary in length and return `None`.
    pub fn fixed_micros(&self) -> Option<i64> {
        match self {
            TimeUnit::Microseconds => Some(1),
            TimeUnit::Milliseconds => Some(1_000),
            TimeUnit::Seconds => Some(1_000_000),
            TimeUnit::Minutes => Some(60_000_000),
            TimeUnit::Hours => Some(3_600_000_000),
            TimeUnit::Days => Some(86_400_000_000),
            TimeUnit::Weeks => Some(604_800_000_000),
            TimeUnit::Months | TimeUnit::Years => None,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Microseconds => write!(f, "Microsecond(s)"),
            TimeUnit::Milliseconds => write!(f, "Millisecond(s)"),
            TimeUnit::Seconds => write!(f, "Second(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Years => write!(f, "Year(s)"),
        }
    }
}
