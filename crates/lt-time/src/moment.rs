//! `LocalMoment`: a calendar date combined with a time of day.
//!
//! Clock arithmetic on a moment carries into the date: adding one
//! microsecond to 23:59:59.999999 rolls over to midnight of the next day.
//! All four clock-unit additions (and their subtractions) funnel through a
//! single floor-division routine so that negative deltas crossing midnight
//! borrow a day correctly.

use std::cmp::Ordering;

use crate::date::CalendarDate;
use crate::time::{
    TimeOfDay, MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::time_unit::TimeUnit;
use lt_core::errors::Result;
use lt_core::floor_div_mod;

const MICROS_PER_DAY: i128 = SECONDS_PER_DAY as i128 * MICROS_PER_SECOND as i128;

/// A zone-naive date and time.
///
/// Ordering compares the date first and then the time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalMoment {
    date: CalendarDate,
    time: TimeOfDay,
}

impl LocalMoment {
    /// -9999-01-01T00:00.
    pub const MIN: LocalMoment = LocalMoment {
        date: CalendarDate::MIN,
        time: TimeOfDay::MIDNIGHT,
    };

    /// 9999-12-31T23:59:59, the open-ended sentinel used by
    /// [`MomentInterval`](crate::interval::MomentInterval).
    pub const MAX: LocalMoment = LocalMoment {
        date: CalendarDate::MAX,
        time: TimeOfDay::MAX.truncate_micros(),
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Combine a date and a time.
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        LocalMoment { date, time }
    }

    /// Validated constructor from individual fields.
    pub fn from_ymd_hms_micro(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        micro: u32,
    ) -> Result<Self> {
        let date = CalendarDate::from_ymd(year, month, day)?;
        TimeOfDay::from_hms_micro(hour, minute, second, micro).map(|time| Self::new(date, time))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The date component.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// The time component.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Replace the date, keeping the time.
    pub fn with_date(self, date: CalendarDate) -> Self {
        LocalMoment { date, ..self }
    }

    /// Replace the time, keeping the date.
    pub fn with_time(self, time: TimeOfDay) -> Self {
        LocalMoment { time, ..self }
    }

    /// Seconds since 1970-01-01T00:00, ignoring microseconds.
    pub fn to_epoch_second(&self) -> i64 {
        self.date.to_epoch_day() * SECONDS_PER_DAY + self.time.to_second_of_day()
    }

    /// Microseconds since 1970-01-01T00:00.
    pub fn to_epoch_micro(&self) -> i64 {
        self.to_epoch_second() * MICROS_PER_SECOND + i64::from(self.time.micro())
    }

    /// Whole seconds from `self` to `other` (positive if `other` is later).
    pub fn seconds_until(&self, other: &Self) -> i64 {
        other.to_epoch_second() - self.to_epoch_second()
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

    /// Return `true` if `self` is strictly earlier than `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Return `true` if `self` is strictly later than `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    // ── Calendar arithmetic ───────────────────────────────────────────────────

    /// Advance the date by `n` years; the time is unchanged.
    pub fn add_years(self, n: i64) -> Self {
        self.with_date(self.date.add_years(n))
    }

    /// Advance the date by `n` months; the time is unchanged.
    pub fn add_months(self, n: i64) -> Self {
        self.with_date(self.date.add_months(n))
    }

    /// Advance the date by `n` weeks; the time is unchanged.
    pub fn add_weeks(self, n: i64) -> Self {
        self.with_date(self.date.add_weeks(n))
    }

    /// Advance the date by `n` days; the time is unchanged.
    pub fn add_days(self, n: i64) -> Self {
        self.with_date(self.date.add_days(n))
    }

    /// Go back `n` years.
    pub fn sub_years(self, n: i64) -> Self {
        self.add_years(-n)
    }

    /// Go back `n` months.
    pub fn sub_months(self, n: i64) -> Self {
        self.add_months(-n)
    }

    /// Go back `n` weeks.
    pub fn sub_weeks(self, n: i64) -> Self {
        self.add_weeks(-n)
    }

    /// Go back `n` days.
    pub fn sub_days(self, n: i64) -> Self {
        self.add_days(-n)
    }

    // ── Clock arithmetic (carries into the date) ──────────────────────────────

    /// Advance by `n` hours.
    pub fn add_hours(self, n: i64) -> Self {
        self.plus_micros(i128::from(n) * i128::from(SECONDS_PER_HOUR * MICROS_PER_SECOND))
    }

    /// Advance by `n` minutes.
    pub fn add_minutes(self, n: i64) -> Self {
        self.plus_micros(i128::from(n) * i128::from(SECONDS_PER_MINUTE * MICROS_PER_SECOND))
    }

    /// Advance by `n` seconds.
    pub fn add_seconds(self, n: i64) -> Self {
        self.plus_micros(i128::from(n) * i128::from(MICROS_PER_SECOND))
    }

    /// Advance by `n` microseconds.
    pub fn add_micros(self, n: i64) -> Self {
        self.plus_micros(i128::from(n))
    }

    /// Go back `n` hours.
    pub fn sub_hours(self, n: i64) -> Self {
        self.add_hours(-n)
    }

    /// Go back `n` minutes.
    pub fn sub_minutes(self, n: i64) -> Self {
        self.add_minutes(-n)
    }

    /// Go back `n` seconds.
    pub fn sub_seconds(self, n: i64) -> Self {
        self.add_seconds(-n)
    }

    /// Go back `n` microseconds.
    pub fn sub_micros(self, n: i64) -> Self {
        self.add_micros(-n)
    }

    /// Range-checked arithmetic in any unit.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`](lt_core::Error::OutOfRange) if the
    /// result leaves the supported date range.
    pub fn checked_add(self, n: i64, unit: TimeUnit) -> Result<Self> {
        if unit.is_date_unit() {
            return self.date.checked_add(n, unit).map(|date| self.with_date(date));
        }
        let per_unit = unit.fixed_micros().map_or(1, i128::from);
        let (carry, time) = self.split_carry(i128::from(n) * per_unit);
        let carry = i64::try_from(carry).unwrap_or(i64::MAX);
        let date = self.date.checked_add(carry, TimeUnit::Days)?;
        Ok(LocalMoment { date, time })
    }

    fn plus_micros(self, delta: i128) -> Self {
        if delta == 0 {
            return self;
        }
        let (carry, time) = self.split_carry(delta);
        debug_assert!(i64::try_from(carry).is_ok(), "day carry {carry} overflows");
        LocalMoment {
            date: self.date.add_days(carry as i64),
            time,
        }
    }

    /// Apply `delta` microseconds to the time of day, returning the floored
    /// day carry and the resulting time.
    fn split_carry(&self, delta: i128) -> (i128, TimeOfDay) {
        let total = i128::from(self.time.to_micro_of_day()) + delta;
        let (carry, micro_of_day) = floor_div_mod(total, MICROS_PER_DAY);
        let micro_of_day = micro_of_day as i64;
        let time = TimeOfDay::from_second_of_day(
            micro_of_day / MICROS_PER_SECOND,
            (micro_of_day % MICROS_PER_SECOND) as u32,
        );
        (carry, time)
    }
}

impl From<CalendarDate> for LocalMoment {
    fn from(date: CalendarDate) -> Self {
        date.at_start_of_day()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl std::fmt::Debug for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalMoment({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8, us: u32) -> LocalMoment {
        LocalMoment::from_ymd_hms_micro(y, mo, d, h, mi, s, us).unwrap()
    }

    #[test]
    fn test_carry_propagation() {
        let m = moment(2023, 5, 15, 23, 59, 59, 999_999);
        assert_eq!(m.add_micros(1), moment(2023, 5, 16, 0, 0, 0, 0));
        assert_eq!(moment(2023, 12, 31, 23, 0, 0, 0).add_hours(1), moment(2024, 1, 1, 0, 0, 0, 0));
    }

    #[test]
    fn test_negative_crossing_midnight() {
        let m = moment(2024, 3, 1, 0, 0, 0, 0);
        assert_eq!(m.sub_micros(1), moment(2024, 2, 29, 23, 59, 59, 999_999));
        assert_eq!(m.add_minutes(-1), moment(2024, 2, 29, 23, 59, 0, 0));
        assert_eq!(m.sub_hours(49), moment(2024, 2, 27, 23, 0, 0, 0));
        assert_eq!(m.sub_seconds(86_400), moment(2024, 2, 29, 0, 0, 0, 0));
    }

    #[test]
    fn test_date_units_keep_time() {
        let m = moment(2024, 1, 31, 8, 30, 0, 0);
        assert_eq!(m.add_months(1), moment(2024, 2, 29, 8, 30, 0, 0));
        assert_eq!(m.add_days(1), moment(2024, 2, 1, 8, 30, 0, 0));
        assert_eq!(m.sub_years(1), moment(2023, 1, 31, 8, 30, 0, 0));
        assert_eq!(m.add_weeks(1).time(), m.time());
    }

    #[test]
    fn test_ordering() {
        let a = moment(2024, 1, 1, 23, 0, 0, 0);
        let b = moment(2024, 1, 2, 0, 0, 0, 0);
        assert!(a < b);
        assert_eq!(a.compare_to(&b), -1);
        assert!(b.is_after(&a));
        assert_eq!(a.seconds_until(&b), 3_600);
    }

    #[test]
    fn test_checked_add() {
        assert!(LocalMoment::MAX.checked_add(999_999, TimeUnit::Microseconds).is_ok());
        assert!(LocalMoment::MAX.checked_add(1, TimeUnit::Seconds).is_err());
        assert!(LocalMoment::MAX.checked_add(1, TimeUnit::Hours).is_err());
        assert!(LocalMoment::MIN.checked_add(-1, TimeUnit::Microseconds).is_err());
        assert_eq!(
            moment(2024, 1, 1, 0, 0, 0, 0).checked_add(-1, TimeUnit::Milliseconds).unwrap(),
            moment(2023, 12, 31, 23, 59, 59, 999_000)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(moment(2024, 1, 5, 9, 0, 0, 0).to_string(), "2024-01-05T09:00");
        assert_eq!(LocalMoment::MAX.to_string(), "9999-12-31T23:59:59");
        assert_eq!(moment(-1, 1, 1, 0, 0, 1, 500_000).to_string(), "-0001-01-01T00:00:01.5");
    }

    #[test]
    fn test_epoch_second() {
        assert_eq!(moment(1970, 1, 1, 0, 0, 0, 0).to_epoch_second(), 0);
        assert_eq!(moment(1969, 12, 31, 23, 59, 59, 0).to_epoch_second(), -1);
        assert_eq!(moment(1970, 1, 1, 0, 0, 1, 5).to_epoch_micro(), 1_000_005);
    }
}
