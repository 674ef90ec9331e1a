//! # lt-time
//!
//! Zone-naive calendar values: dates, times of day, local moments, and the
//! intervals between them.
//!
//! ```
//! use lt_time::{CalendarDate, DateInterval, Iso8601};
//!
//! let start = CalendarDate::from_ymd(2024, 1, 1)?;
//! let week = DateInterval::half_open_right(start, start.add_weeks(1))?;
//! assert_eq!(week.days(), 7);
//! assert_eq!(week.to_iso_string(), "[2024-01-01, 2024-01-08)");
//! # Ok::<(), lt_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `IntervalBoundary`: endpoint inclusion policy.
pub mod boundary;

/// `CalendarDate` and the epoch-day conversion.
pub mod date;

/// Conversions from `chrono` values and the current clock.
pub mod external;

/// `Interval<P>`, `DateInterval`, `MomentInterval`.
pub mod interval;

/// ISO-8601 parsing and the `Iso8601` trait.
pub mod iso;

/// `LocalMoment`: date plus time of day.
pub mod moment;

/// `Month`: month of the year.
pub mod month;

#[cfg(feature = "serde")]
mod serde_impls;

/// `TimeOfDay`: wall-clock time.
pub mod time;

/// `TimeUnit`: microseconds through years.
pub mod time_unit;

/// `Weekday`: ISO day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use boundary::IntervalBoundary;
pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use interval::{DateInterval, Interval, IntervalIter, IntervalPoint, MomentInterval};
pub use iso::Iso8601;
pub use moment::LocalMoment;
pub use month::Month;
pub use time::TimeOfDay;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
