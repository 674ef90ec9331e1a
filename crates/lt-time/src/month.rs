//! `Month`: month of the year and its Gregorian length rules.

use lt_core::errors::{Error, Result};

/// Month of the year, numbered 1–12 (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Days before the first of each month in a non-leap year.
const DAYS_BEFORE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

impl Month {
    /// The 1-based month number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Number of days in this month; February has 29 when `leap` is set.
    pub fn length(self, leap: bool) -> u8 {
        match self {
            Month::February => {
                if leap {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Number of days in the year that precede the first of this month.
    pub fn days_before(self, leap: bool) -> u16 {
        let base = DAYS_BEFORE[self as usize - 1];
        if leap && self > Month::February {
            base + 1
        } else {
            base
        }
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Error::check_range("month", i64::from(n), 1, 12)?;
        Ok(ALL[n as usize - 1])
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m.number()
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_roundtrip() {
        for n in 1..=12u8 {
            assert_eq!(Month::try_from(n).unwrap().number(), n);
        }
        assert_eq!(Month::try_from(0).unwrap_err().code(), "out_of_range");
        assert_eq!(Month::try_from(13).unwrap_err().code(), "out_of_range");
    }

    #[test]
    fn test_lengths_sum_to_year() {
        let common: u16 = ALL.iter().map(|m| u16::from(m.length(false))).sum();
        let leap: u16 = ALL.iter().map(|m| u16::from(m.length(true))).sum();
        assert_eq!(common, 365);
        assert_eq!(leap, 366);
    }

    #[test]
    fn test_days_before() {
        assert_eq!(Month::January.days_before(true), 0);
        assert_eq!(Month::March.days_before(false), 59);
        assert_eq!(Month::March.days_before(true), 60);
        assert_eq!(Month::December.days_before(true), 335);
    }
}
