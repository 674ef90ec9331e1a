//! Conversions from `chrono` values and "now" snapshots.
//!
//! The library clock is read through [`Settings::now`], so a frozen instant
//! (see [`lt_core::ScopedFrozenClock`]) makes every function here
//! deterministic.  The instant is projected into the caller's zone and the
//! zone is then dropped: every value produced here is zone-naive.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use crate::date::CalendarDate;
use crate::moment::LocalMoment;
use crate::time::TimeOfDay;
use lt_core::errors::{Error, Result};
use lt_core::{Settings, MIN_YEAR};

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = Error;

    /// Fails only for years outside -9999..=9999.
    fn try_from(date: NaiveDate) -> Result<Self> {
        CalendarDate::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Nanoseconds are truncated to microseconds; a leap second
    /// (nanoseconds ≥ 1e9) is clamped to the last microsecond of its second.
    fn from(time: NaiveTime) -> Self {
        let micro = time.nanosecond().min(999_999_999) / 1_000;
        TimeOfDay::from_hms_micro_unchecked(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            micro,
        )
    }
}

impl TryFrom<NaiveDateTime> for LocalMoment {
    type Error = Error;

    fn try_from(moment: NaiveDateTime) -> Result<Self> {
        let date = CalendarDate::try_from(moment.date())?;
        Ok(LocalMoment::new(date, moment.time().into()))
    }
}

impl LocalMoment {
    /// The wall-clock reading of a zoned timestamp.
    pub fn from_zoned<Tz: TimeZone>(moment: &DateTime<Tz>) -> Result<Self> {
        LocalMoment::try_from(moment.naive_local())
    }

    /// The current wall-clock moment in `zone`.
    ///
    /// A clock reading outside the supported years saturates to the nearest
    /// representable moment.
    pub fn now<Tz: TimeZone>(zone: &Tz) -> Self {
        let local = Settings::instance().now().with_timezone(zone).naive_local();
        LocalMoment::try_from(local).unwrap_or_else(|_| {
            if local.year() < MIN_YEAR {
                LocalMoment::MIN
            } else {
                CalendarDate::MAX.at_time(TimeOfDay::MAX)
            }
        })
    }

    /// Return `true` if this moment is later than now in `zone`.
    pub fn is_future<Tz: TimeZone>(&self, zone: &Tz) -> bool {
        *self > Self::now(zone)
    }

    /// Return `true` if this moment is earlier than now in `zone`.
    pub fn is_past<Tz: TimeZone>(&self, zone: &Tz) -> bool {
        *self < Self::now(zone)
    }
}

impl CalendarDate {
    /// Today's date in `zone`.
    pub fn today<Tz: TimeZone>(zone: &Tz) -> Self {
        LocalMoment::now(zone).date()
    }

    /// Return `true` if this date is after today in `zone`.
    pub fn is_future<Tz: TimeZone>(&self, zone: &Tz) -> bool {
        *self > Self::today(zone)
    }

    /// Return `true` if this date is before today in `zone`.
    pub fn is_past<Tz: TimeZone>(&self, zone: &Tz) -> bool {
        *self < Self::today(zone)
    }
}

impl TimeOfDay {
    /// The current wall-clock time in `zone`.
    pub fn now<Tz: TimeZone>(zone: &Tz) -> Self {
        LocalMoment::now(zone).time()
    }
}
