//! ISO-8601 text conversion.
//!
//! Formatting lives in each type's `Display` impl; this module adds the
//! matching `FromStr` impls and the [`Iso8601`] trait with the nullable
//! constructors.
//!
//! Accepted grammar (exactly what `Display` emits, plus an optional `+` on
//! the year and 1–6 fractional digits):
//!
//! ```text
//! date      = ["+" / "-"] 4DIGIT "-" 2DIGIT "-" 2DIGIT
//! time      = 2DIGIT ":" 2DIGIT [":" 2DIGIT ["." 1*6DIGIT]]
//! moment    = date "T" time
//! interval  = ("[" / "(") point ", " point ("]" / ")")
//! ```

use std::str::FromStr;

use crate::boundary::IntervalBoundary;
use crate::date::CalendarDate;
use crate::interval::{Interval, IntervalPoint};
use crate::moment::LocalMoment;
use crate::time::TimeOfDay;
use lt_core::errors::{Error, Result};

/// ISO-8601 string conversion shared by every value type.
pub trait Iso8601: Sized + FromStr<Err = Error> + std::fmt::Display {
    /// The ISO-8601 representation.
    fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// Parse an ISO-8601 string.
    fn try_from_iso(input: &str) -> Result<Self> {
        input.parse()
    }

    /// `None` for `None` or for input that does not parse.
    fn from_nullable(input: Option<&str>) -> Option<Self> {
        input.and_then(|s| s.parse().ok())
    }

    /// `Ok(None)` for `None`, otherwise the parse result.
    fn try_from_nullable(input: Option<&str>) -> Result<Option<Self>> {
        input.map(str::parse).transpose()
    }
}

impl Iso8601 for CalendarDate {}
impl Iso8601 for TimeOfDay {}
impl Iso8601 for LocalMoment {}
impl<P: IntervalPoint + Iso8601> Iso8601 for Interval<P> {}

// ── Field parsing ─────────────────────────────────────────────────────────────

/// Parse a field of exactly `width` ASCII digits.
fn fixed_field(part: &str, width: usize) -> Option<u32> {
    if part.len() == width && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

/// Split a date string (`YYYY-MM-DD`, optionally signed) into its fields.
///
/// Returns `(year, month, day)` on success; range checks are left to
/// [`CalendarDate::from_ymd`].
fn parse_iso_date(s: &str) -> Option<(i32, u8, u8)> {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let parts: Vec<&str> = unsigned.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };
    let year = fixed_field(year, 4)? as i32;
    let month = fixed_field(month, 2)? as u8;
    let day = fixed_field(day, 2)? as u8;
    Some((sign * year, month, day))
}

/// Split a time string (`HH:MM[:SS[.ffffff]]`) into hour, minute, second
/// and microsecond fields.
fn parse_iso_time(s: &str) -> Option<(u8, u8, u8, u32)> {
    let parts: Vec<&str> = s.split(':').collect();
    let (hour, minute, seconds) = match parts.as_slice() {
        [hour, minute] => (hour, minute, None),
        [hour, minute, seconds] => (hour, minute, Some(*seconds)),
        _ => return None,
    };
    let hour = fixed_field(hour, 2)? as u8;
    let minute = fixed_field(minute, 2)? as u8;
    let (second, micro) = match seconds.map(|sec| sec.split_once('.').ok_or(sec)) {
        None => (0, 0),
        Some(Err(whole)) => (fixed_field(whole, 2)?, 0),
        Some(Ok((whole, fraction))) => {
            if !(1..=6).contains(&fraction.len()) {
                return None;
            }
            let scale = 10u32.pow((6 - fraction.len()) as u32);
            (fixed_field(whole, 2)?, fixed_field(fraction, fraction.len())? * scale)
        }
    };
    Some((hour, minute, second as u8, micro))
}

// ── FromStr ───────────────────────────────────────────────────────────────────

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month, day) = parse_iso_date(s).ok_or_else(|| Error::parse("date", s))?;
        CalendarDate::from_ymd(year, month, day)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute, second, micro) =
            parse_iso_time(s).ok_or_else(|| Error::parse("time", s))?;
        TimeOfDay::from_hms_micro(hour, minute, second, micro)
    }
}

impl FromStr for LocalMoment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields = s
            .split_once('T')
            .and_then(|(date, time)| Some((parse_iso_date(date)?, parse_iso_time(time)?)));
        let ((year, month, day), (hour, minute, second, micro)) =
            fields.ok_or_else(|| Error::parse("moment", s))?;
        LocalMoment::from_ymd_hms_micro(year, month, day, hour, minute, second, micro)
    }
}

impl<P> FromStr for Interval<P>
where
    P: IntervalPoint + FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let error = || Error::parse("interval", s);
        let mut chars = s.chars();
        let left = chars.next().ok_or_else(error)?;
        let right = chars.next_back().ok_or_else(error)?;
        let boundary = IntervalBoundary::from_brackets(left, right).map_err(|_| error())?;
        let (from, to) = chars.as_str().split_once(", ").ok_or_else(error)?;
        Interval::new(from.parse()?, Some(to.parse()?), boundary)
    }
}
