//! `Weekday`: ISO-8601 day of the week.

use lt_core::floor_mod;

/// Day of the week, numbered 1–7 per ISO-8601 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Weekday of the given epoch day (day 0, 1970-01-01, was a Thursday).
    pub fn from_epoch_day(epoch_day: i64) -> Self {
        ALL[floor_mod(epoch_day + 3, 7) as usize]
    }

    /// The weekday `n` days later (negative `n` goes back).
    pub fn add_days(self, n: i64) -> Self {
        ALL[floor_mod(self as i64 - 1 + n, 7) as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_anchor() {
        assert_eq!(Weekday::from_epoch_day(0), Weekday::Thursday);
        assert_eq!(Weekday::from_epoch_day(-1), Weekday::Wednesday);
        assert_eq!(Weekday::from_epoch_day(3), Weekday::Sunday);
        assert_eq!(Weekday::from_epoch_day(4), Weekday::Monday);
    }

    #[test]
    fn test_add_days_wraps() {
        assert_eq!(Weekday::Sunday.add_days(1), Weekday::Monday);
        assert_eq!(Weekday::Monday.add_days(-1), Weekday::Sunday);
        assert_eq!(Weekday::Friday.add_days(14), Weekday::Friday);
    }
}
