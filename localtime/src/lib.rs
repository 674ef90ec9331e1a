//! # localtime
//!
//! Zone-naive calendar arithmetic: proleptic-Gregorian dates, wall-clock
//! times, local moments, and intervals between them.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! localtime = "0.1"
//! ```
//!
//! ```rust
//! use localtime::prelude::*;
//!
//! let start: LocalMoment = "2024-02-28T22:30".parse()?;
//! let end = start.add_hours(30);
//! assert_eq!(end.to_iso_string(), "2024-03-01T04:30");
//!
//! let stay = MomentInterval::half_open_right(start, end)?;
//! assert_eq!(stay.duration_in_minutes(), 30 * 60);
//! assert!(stay.contains(start));
//! assert!(!stay.contains(end));
//! # Ok::<(), localtime::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, floor arithmetic, and the process-wide clock settings.
pub use lt_core as core;

/// Dates, times of day, moments, intervals and ISO-8601 I/O.
pub use lt_time as time;

/// The types most programs need, in one import.
pub mod prelude {
    pub use lt_core::{Error, Result};
    pub use lt_time::{
        CalendarDate, DateInterval, IntervalBoundary, Iso8601, LocalMoment, Month,
        MomentInterval, TimeOfDay, TimeUnit, Weekday,
    };
}
