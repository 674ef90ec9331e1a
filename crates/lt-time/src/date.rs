//! `CalendarDate`: a zone-naive proleptic-Gregorian date.
//!
//! Dates are stored as their (year, month, day) fields and converted to a
//! signed **epoch day** (day 0 = 1970-01-01) whenever day-level arithmetic
//! is needed.
//!
//! # Epoch-day convention
//! * Epoch day 0 = January 1, 1970; negative values precede it.
//! * The supported range is -9999-01-01 (epoch day -4 371 587) to
//!   9999-12-31 (epoch day 2 932 896).
//!
//! # Construction
//! * [`CalendarDate::from_ymd`] validates every field and returns a
//!   [`Result`].
//! * [`CalendarDate::from_ymd_unchecked`] is the trusted path for values the
//!   caller has already validated; violations trip a `debug_assert!`.

use std::cmp::Ordering;

use crate::moment::LocalMoment;
use crate::month::Month;
use crate::time::TimeOfDay;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use lt_core::errors::{Error, Result};
use lt_core::{floor_div_mod, MAX_YEAR, MIN_YEAR};

/// A calendar date without time zone.
///
/// Field order makes the derived ordering lexicographic on
/// (year, month, day).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

// ── Epoch-day constants ───────────────────────────────────────────────────────

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_CYCLE: i64 = 146_097;

/// Days from 0000-01-01 to 1970-01-01.
const DAYS_0000_TO_1970: i64 = DAYS_PER_CYCLE * 5 - (30 * 365 + 7);

/// Epoch day of [`CalendarDate::MIN`].
pub const MIN_EPOCH_DAY: i64 = CalendarDate::MIN.to_epoch_day();

/// Epoch day of [`CalendarDate::MAX`].
pub const MAX_EPOCH_DAY: i64 = CalendarDate::MAX.to_epoch_day();

impl CalendarDate {
    /// Earliest supported date: -9999-01-01.
    pub const MIN: CalendarDate = CalendarDate {
        year: MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// Latest supported date: 9999-12-31.
    pub const MAX: CalendarDate = CalendarDate {
        year: MAX_YEAR,
        month: 12,
        day: 31,
    };

    /// 1970-01-01, epoch day 0.
    pub const EPOCH: CalendarDate = CalendarDate {
        year: 1970,
        month: 1,
        day: 1,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// Checks run in order (year range, month range, day range, then
    /// calendar validity) and the first failure is returned.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        Error::check_range("year", year.into(), MIN_YEAR.into(), MAX_YEAR.into())?;
        Error::check_range("month", month.into(), 1, 12)?;
        Error::check_range("day", day.into(), 1, 31)?;
        if day > days_in_month(year, month) {
            tracing::debug!(year, month, day, "rejected non-existent calendar date");
            return Err(Error::InvalidDate { year, month, day });
        }
        Ok(CalendarDate { year, month, day })
    }

    /// Create a date from fields the caller guarantees to be valid.
    pub fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(
            is_valid_ymd(year, month, day),
            "invalid calendar date {year}-{month:02}-{day:02}"
        );
        CalendarDate { year, month, day }
    }

    /// Create the date `epoch_day` days after 1970-01-01.
    ///
    /// The caller guarantees `epoch_day` lies in
    /// [`MIN_EPOCH_DAY`]`..=`[`MAX_EPOCH_DAY`].
    pub fn from_epoch_day(epoch_day: i64) -> Self {
        debug_assert!(
            (MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&epoch_day),
            "epoch day {epoch_day} out of range"
        );
        // Day zero becomes 0000-03-01 so the leap day is the last day of
        // each (March-based) year.
        let mut zero_day = epoch_day + DAYS_0000_TO_1970 - 60;
        let mut adjust = 0;
        if zero_day < 0 {
            let adjust_cycles = (zero_day + 1) / DAYS_PER_CYCLE - 1;
            adjust = adjust_cycles * 400;
            zero_day -= adjust_cycles * DAYS_PER_CYCLE;
        }
        let mut year_est = (400 * zero_day + 591) / DAYS_PER_CYCLE;
        let mut doy_est = zero_day - days_before_march_year(year_est);
        if doy_est < 0 {
            year_est -= 1;
            doy_est = zero_day - days_before_march_year(year_est);
        }
        year_est += adjust;

        let march_month0 = (doy_est * 5 + 2) / 153;
        let month = (march_month0 + 2) % 12 + 1;
        let day = doy_est - (march_month0 * 306 + 5) / 10 + 1;
        year_est += march_month0 / 10;

        Self::from_ymd_unchecked(year_est as i32, month as u8, day as u8)
    }

    /// Validated counterpart of [`from_epoch_day`](Self::from_epoch_day).
    pub fn try_from_epoch_day(epoch_day: i64) -> Result<Self> {
        Error::check_range("epoch day", epoch_day, MIN_EPOCH_DAY, MAX_EPOCH_DAY)?;
        Ok(Self::from_epoch_day(epoch_day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The year (-9999–9999).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::try_from(self.month).unwrap_or(Month::January)
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        self.month_of_year().days_before(self.is_leap_year()) + u16::from(self.day)
    }

    /// The ISO weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_day(self.to_epoch_day())
    }

    /// Whether this date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn length_of_month(&self) -> u8 {
        self.month_of_year().length(self.is_leap_year())
    }

    /// Number of days in this date's year.
    pub fn length_of_year(&self) -> u16 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Signed number of days since 1970-01-01.
    pub const fn to_epoch_day(&self) -> i64 {
        let y = self.year as i64;
        let m = self.month as i64;
        let mut total = 365 * y;
        if y >= 0 {
            total += (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400;
        } else {
            total -= y / -4 - y / -100 + y / -400;
        }
        total += (367 * m - 362) / 12;
        total += self.day as i64 - 1;
        if m > 2 {
            total -= 1;
            if !is_leap_year(self.year) {
                total -= 1;
            }
        }
        total - DAYS_0000_TO_1970
    }

    /// The first day of this date's month.
    pub fn first_day_of_month(self) -> Self {
        CalendarDate { day: 1, ..self }
    }

    /// The last day of this date's month.
    pub fn last_day_of_month(self) -> Self {
        CalendarDate {
            day: self.length_of_month(),
            ..self
        }
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_last_day_of_month(&self) -> bool {
        self.day == self.length_of_month()
    }

    /// Combine with a time of day.
    pub fn at_time(self, time: TimeOfDay) -> LocalMoment {
        LocalMoment::new(self, time)
    }

    /// This date at midnight.
    pub fn at_start_of_day(self) -> LocalMoment {
        LocalMoment::new(self, TimeOfDay::MIDNIGHT)
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

    /// Number of days from `self` to `other` (positive if `other` is later).
    pub fn days_until(&self, other: &Self) -> i64 {
        other.to_epoch_day() - self.to_epoch_day()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` years, clamping Feb 29 to Feb 28 in non-leap years.
    pub fn add_years(self, n: i64) -> Self {
        if n == 0 {
            return self;
        }
        resolve_previous_valid(i64::from(self.year) + n, self.month, self.day)
    }

    /// Advance by `n` months, clamping the day to the target month's length.
    pub fn add_months(self, n: i64) -> Self {
        if n == 0 {
            return self;
        }
        let (year_delta, month0) = floor_div_mod(i64::from(self.month) + n - 1, 12);
        resolve_previous_valid(
            i64::from(self.year) + year_delta,
            month0 as u8 + 1,
            self.day,
        )
    }

    /// Advance by `n` weeks.
    pub fn add_weeks(self, n: i64) -> Self {
        self.add_days(n * 7)
    }

    /// Advance by `n` days.
    pub fn add_days(self, n: i64) -> Self {
        match n {
            0 => self,
            1 if self.is_last_day_of_month() => {
                if self.month == 12 {
                    Self::from_ymd_unchecked(self.year + 1, 1, 1)
                } else {
                    CalendarDate {
                        month: self.month + 1,
                        day: 1,
                        ..self
                    }
                }
            }
            1 => CalendarDate {
                day: self.day + 1,
                ..self
            },
            _ => Self::from_epoch_day(self.to_epoch_day() + n),
        }
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

    /// Range-checked arithmetic in any calendar unit.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedUnit`] for clock units and
    /// [`Error::OutOfRange`] if the result leaves the supported range.
    pub fn checked_add(self, n: i64, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days | TimeUnit::Weeks => {
                let days = if unit == TimeUnit::Weeks {
                    n.checked_mul(7)
                } else {
                    Some(n)
                };
                let target = days
                    .and_then(|d| self.to_epoch_day().checked_add(d))
                    .unwrap_or(i64::MAX);
                Self::try_from_epoch_day(target)
            }
            TimeUnit::Months | TimeUnit::Years => {
                let months = if unit == TimeUnit::Years {
                    n.checked_mul(12)
                } else {
                    Some(n)
                };
                let index = months
                    .and_then(|m| (i64::from(self.month) - 1).checked_add(m))
                    .unwrap_or(i64::MAX);
                let (year_delta, _) = floor_div_mod(index, 12);
                let year = i64::from(self.year).saturating_add(year_delta);
                Error::check_range("year", year, MIN_YEAR.into(), MAX_YEAR.into())?;
                Ok(if unit == TimeUnit::Years {
                    self.add_years(n)
                } else {
                    self.add_months(n)
                })
            }
            _ => Err(Error::UnsupportedUnit {
                unit: unit.to_string(),
                target: "CalendarDate",
            }),
        }
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<CalendarDate> for CalendarDate {
    type Output = i64;
    fn sub(self, rhs: CalendarDate) -> i64 {
        self.to_epoch_day() - rhs.to_epoch_day()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let y = self.year;
        if y.abs() < 1000 {
            if y < 0 {
                write!(f, "-{:04}", -y)?;
            } else {
                write!(f, "{y:04}")?;
            }
        } else {
            write!(f, "{y}")?;
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_valid_ymd(year: i32, month: u8, day: u8) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
        && (1..=12).contains(&month)
        && day >= 1
        && day <= days_in_month(year, month)
}

/// Days from 0000-03-01 to March 1st of the given March-based year.
fn days_before_march_year(year: i64) -> i64 {
    365 * year + year / 4 - year / 100 + year / 400
}

/// Build a date, moving the day back to the last valid day of the month.
fn resolve_previous_valid(year: i64, month: u8, day: u8) -> CalendarDate {
    debug_assert!(
        (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year),
        "year {year} out of range"
    );
    let year = year as i32;
    let day = day.min(days_in_month(year, month));
    CalendarDate::from_ymd_unchecked(year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(CalendarDate::from_epoch_day(0), date(1970, 1, 1));
        assert_eq!(CalendarDate::from_epoch_day(-1), date(1969, 12, 31));
        assert_eq!(CalendarDate::EPOCH.to_epoch_day(), 0);
        assert_eq!(date(2024, 1, 1).to_epoch_day(), 19_723);
        assert_eq!(date(0, 1, 1).to_epoch_day(), -719_528);
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(MIN_EPOCH_DAY, -4_371_587);
        assert_eq!(MAX_EPOCH_DAY, 2_932_896);
        assert_eq!(CalendarDate::from_epoch_day(MIN_EPOCH_DAY), CalendarDate::MIN);
        assert_eq!(CalendarDate::from_epoch_day(MAX_EPOCH_DAY), CalendarDate::MAX);
        assert!(CalendarDate::try_from_epoch_day(MAX_EPOCH_DAY + 1).is_err());
    }

    #[test]
    fn test_validation_order() {
        let err = CalendarDate::from_ymd(10_000, 13, 0).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                field: "year",
                value: 10_000,
                min: -9999,
                max: 9999
            }
        );
        let err = CalendarDate::from_ymd(2024, 13, 0).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { field: "month", .. }));
        let err = CalendarDate::from_ymd(2024, 1, 32).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { field: "day", .. }));
        let err = CalendarDate::from_ymd(2024, 2, 30).unwrap_err();
        assert_eq!(err.code(), "invalid_date");
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(2023, 4, 31).is_err());
    }

    #[test]
    fn test_month_end_clamp() {
        assert_eq!(date(2024, 2, 29).add_years(1), date(2025, 2, 28));
        assert_eq!(date(2024, 2, 29).add_years(4), date(2028, 2, 29));
        assert_eq!(date(2023, 1, 31).add_months(1), date(2023, 2, 28));
        assert_eq!(date(2024, 3, 31).add_months(-1), date(2024, 2, 29));
    }

    #[test]
    fn test_add_months_negative_crosses_year() {
        assert_eq!(date(2024, 1, 15).add_months(-1), date(2023, 12, 15));
        assert_eq!(date(2024, 1, 15).add_months(-13), date(2022, 12, 15));
        assert_eq!(date(2024, 12, 15).add_months(1), date(2025, 1, 15));
        assert_eq!(date(2024, 5, 10).sub_months(24), date(2022, 5, 10));
    }

    #[test]
    fn test_add_days_fast_path() {
        assert_eq!(date(2023, 12, 31).add_days(1), date(2024, 1, 1));
        assert_eq!(date(2024, 2, 28).add_days(1), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).add_days(1), date(2024, 3, 1));
        assert_eq!(date(2024, 6, 14).add_days(1), date(2024, 6, 15));
        assert_eq!(date(2024, 3, 1).add_days(-1), date(2024, 2, 29));
        assert_eq!(date(2024, 1, 1).add_weeks(2), date(2024, 1, 15));
        assert_eq!(date(2024, 1, 1).sub_weeks(1), date(2023, 12, 25));
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let d = date(2024, 2, 29);
        assert_eq!(d.add_days(0), d);
        assert_eq!(d.add_months(0), d);
        assert_eq!(d.add_years(0), d);
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(
            date(2024, 1, 31).checked_add(1, TimeUnit::Months).unwrap(),
            date(2024, 2, 29)
        );
        assert!(CalendarDate::MAX.checked_add(1, TimeUnit::Days).is_err());
        assert!(CalendarDate::MAX.checked_add(1, TimeUnit::Months).is_err());
        assert!(CalendarDate::MIN.checked_add(-1, TimeUnit::Years).is_err());
        assert!(CalendarDate::MIN.checked_add(i64::MIN, TimeUnit::Weeks).is_err());
        assert_eq!(
            date(2024, 1, 1).checked_add(1, TimeUnit::Hours).unwrap_err().code(),
            "unsupported_unit"
        );
    }

    #[test]
    fn test_lengths() {
        assert_eq!(date(2024, 2, 1).length_of_month(), 29);
        assert_eq!(date(2023, 2, 1).length_of_month(), 28);
        assert_eq!(date(1900, 2, 1).length_of_month(), 28);
        assert_eq!(date(2000, 2, 1).length_of_month(), 29);
        assert_eq!(date(2024, 4, 1).length_of_month(), 30);
        assert_eq!(date(2024, 7, 1).length_of_month(), 31);
        assert_eq!(date(2024, 7, 1).length_of_year(), 366);
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn test_accessors() {
        let d = date(2024, 3, 1);
        assert_eq!(d.day_of_year(), 61);
        assert_eq!(d.weekday(), Weekday::Friday);
        assert_eq!(d.month_of_year(), Month::March);
        assert_eq!(date(2024, 2, 10).last_day_of_month(), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 10).first_day_of_month(), date(2024, 2, 1));
        assert_eq!(date(2024, 1, 1).days_until(&date(2024, 3, 1)), 60);
        assert_eq!(date(2024, 3, 1) - date(2024, 1, 1), 60);
    }

    #[test]
    fn test_compare() {
        let a = date(2024, 1, 31);
        let b = date(2024, 2, 1);
        assert_eq!(a.compare_to(&b), -1);
        assert_eq!(b.compare_to(&a), 1);
        assert_eq!(a.compare_to(&a), 0);
        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_after(&a));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 1, 5).to_string(), "2024-01-05");
        assert_eq!(date(999, 12, 31).to_string(), "0999-12-31");
        assert_eq!(date(0, 1, 1).to_string(), "0000-01-01");
        assert_eq!(date(-5, 3, 1).to_string(), "-0005-03-01");
        assert_eq!(date(-1000, 3, 1).to_string(), "-1000-03-01");
        assert_eq!(format!("{:?}", date(2024, 1, 5)), "CalendarDate(2024-01-05)");
    }
}
