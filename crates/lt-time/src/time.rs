//! `TimeOfDay`: a wall-clock time with microsecond precision.
//!
//! All arithmetic wraps around midnight; carrying into a date is the job of
//! [`LocalMoment`](crate::moment::LocalMoment).

use std::cmp::Ordering;

use crate::time_unit::TimeUnit;
use lt_core::errors::{Error, Result};
use lt_core::floor_div_mod;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const MINUTES_PER_DAY: i64 = 1_440;
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;

/// A time of day without date or zone.
///
/// Ordering compares second-of-day first, then microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    micro: u32,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        micro: 0,
    };

    /// 12:00.
    pub const NOON: TimeOfDay = TimeOfDay {
        hour: 12,
        minute: 0,
        second: 0,
        micro: 0,
    };

    /// 23:59:59.999999, the last representable instant of a day.
    pub const MAX: TimeOfDay = TimeOfDay {
        hour: 23,
        minute: 59,
        second: 59,
        micro: 999_999,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Validated constructor; each field is checked against its own bound
    /// and the first failure is returned.
    pub fn from_hms_micro(hour: u8, minute: u8, second: u8, micro: u32) -> Result<Self> {
        Error::check_range("hour", hour.into(), 0, 23)?;
        Error::check_range("minute", minute.into(), 0, 59)?;
        Error::check_range("second", second.into(), 0, 59)?;
        Error::check_range("microsecond", micro.into(), 0, 999_999)?;
        Ok(TimeOfDay {
            hour,
            minute,
            second,
            micro,
        })
    }

    /// Validated constructor with zero microseconds.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self> {
        Self::from_hms_micro(hour, minute, second, 0)
    }

    /// Trusted constructor; the caller guarantees every field is in range.
    pub fn from_hms_micro_unchecked(hour: u8, minute: u8, second: u8, micro: u32) -> Self {
        debug_assert!(
            hour < 24 && minute < 60 && second < 60 && micro < 1_000_000,
            "invalid time of day {hour}:{minute}:{second}.{micro}"
        );
        TimeOfDay {
            hour,
            minute,
            second,
            micro,
        }
    }

    /// Decompose a second-of-day (0–86 399) plus microseconds.
    pub fn from_second_of_day(second_of_day: i64, micro_of_second: u32) -> Self {
        debug_assert!(
            (0..SECONDS_PER_DAY).contains(&second_of_day),
            "second of day {second_of_day} out of range"
        );
        let hour = second_of_day / SECONDS_PER_HOUR;
        let rem = second_of_day % SECONDS_PER_HOUR;
        let minute = rem / SECONDS_PER_MINUTE;
        let second = rem % SECONDS_PER_MINUTE;
        Self::from_hms_micro_unchecked(hour as u8, minute as u8, second as u8, micro_of_second)
    }

    /// Validated counterpart of [`from_second_of_day`](Self::from_second_of_day).
    pub fn try_from_second_of_day(second_of_day: i64, micro_of_second: u32) -> Result<Self> {
        Error::check_range("second of day", second_of_day, 0, SECONDS_PER_DAY - 1)?;
        Error::check_range("microsecond", micro_of_second.into(), 0, 999_999)?;
        Ok(Self::from_second_of_day(second_of_day, micro_of_second))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second (0–59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Microsecond (0–999 999).
    pub fn micro(&self) -> u32 {
        self.micro
    }

    /// The same time with the microsecond part dropped.
    pub const fn truncate_micros(self) -> Self {
        TimeOfDay { micro: 0, ..self }
    }

    /// Seconds since midnight, excluding the microsecond part.
    pub fn to_second_of_day(&self) -> i64 {
        i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second)
    }

    /// Microseconds since midnight.
    pub fn to_micro_of_day(&self) -> i64 {
        self.to_second_of_day() * MICROS_PER_SECOND + i64::from(self.micro)
    }

    // ── Comparison ────────────────────────────────────────────────────────────

    /// Three-way comparison returning -1, 0, or 1.
    pub fn compare_to(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Return `true` if `self` is strictly earlier in the day than `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Return `true` if `self` is strictly later in the day than `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    // ── Arithmetic (wrapping) ─────────────────────────────────────────────────

    /// Add `n` hours, wrapping around midnight.
    pub fn add_hours(self, n: i64) -> Self {
        if n == 0 {
            return self;
        }
        let hour = (n % HOURS_PER_DAY + i64::from(self.hour) + HOURS_PER_DAY) % HOURS_PER_DAY;
        TimeOfDay {
            hour: hour as u8,
            ..self
        }
    }

    /// Add `n` minutes, wrapping around midnight.
    pub fn add_minutes(self, n: i64) -> Self {
        if n == 0 {
            return self;
        }
        let current = i64::from(self.hour) * 60 + i64::from(self.minute);
        let minute_of_day = (n % MINUTES_PER_DAY + current + MINUTES_PER_DAY) % MINUTES_PER_DAY;
        TimeOfDay {
            hour: (minute_of_day / 60) as u8,
            minute: (minute_of_day % 60) as u8,
            ..self
        }
    }

    /// Add `n` seconds, wrapping around midnight.
    pub fn add_seconds(self, n: i64) -> Self {
        if n == 0 {
            return self;
        }
        let second_of_day = (n % SECONDS_PER_DAY + self.to_second_of_day() + SECONDS_PER_DAY)
            % SECONDS_PER_DAY;
        Self::from_second_of_day(second_of_day, self.micro)
    }

    /// Add `n` microseconds, carrying whole seconds into
    /// [`add_seconds`](Self::add_seconds).
    pub fn add_micros(self, n: i64) -> Self {
        if n == 0 {
            return self;
        }
        let total = i64::from(self.micro) + n % (SECONDS_PER_DAY * MICROS_PER_SECOND);
        let (carry, micro) = floor_div_mod(total, MICROS_PER_SECOND);
        TimeOfDay {
            micro: micro as u32,
            ..self
        }
        .add_seconds(carry)
    }

    /// Subtract `n` hours, wrapping around midnight.
    pub fn sub_hours(self, n: i64) -> Self {
        self.add_hours(-n)
    }

    /// Subtract `n` minutes, wrapping around midnight.
    pub fn sub_minutes(self, n: i64) -> Self {
        self.add_minutes(-n)
    }

    /// Subtract `n` seconds, wrapping around midnight.
    pub fn sub_seconds(self, n: i64) -> Self {
        self.add_seconds(-n)
    }

    /// Subtract `n` microseconds, wrapping around midnight.
    pub fn sub_micros(self, n: i64) -> Self {
        self.add_micros(-n)
    }

    /// Wrapping arithmetic in any clock unit.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedUnit`] for calendar units.
    pub fn checked_add(self, n: i64, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Hours => Ok(self.add_hours(n)),
            TimeUnit::Minutes => Ok(self.add_minutes(n)),
            TimeUnit::Seconds => Ok(self.add_seconds(n)),
            TimeUnit::Milliseconds => {
                let (seconds, millis) = floor_div_mod(n, 1_000);
                Ok(self.add_seconds(seconds % SECONDS_PER_DAY).add_micros(millis * 1_000))
            }
            TimeUnit::Microseconds => Ok(self.add_micros(n)),
            _ => Err(Error::UnsupportedUnit {
                unit: unit.to_string(),
                target: "TimeOfDay",
            }),
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if self.second == 0 && self.micro == 0 {
            return Ok(());
        }
        write!(f, ":{:02}", self.second)?;
        if self.micro == 0 {
            return Ok(());
        }
        let fraction = format!("{:06}", self.micro);
        write!(f, ".{}", fraction.trim_end_matches('0'))
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}
