//! Serde support: every value type serialises as its ISO-8601 string and
//! deserialises through `FromStr`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::CalendarDate;
use crate::interval::{Interval, IntervalPoint};
use crate::iso::Iso8601;
use crate::moment::LocalMoment;
use crate::time::TimeOfDay;

fn serialize_iso<T: Iso8601, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn deserialize_iso<'de, T: Iso8601, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(D::Error::custom)
}

macro_rules! iso_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serialize_iso(self, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserialize_iso(deserializer)
                }
            }
        )*
    };
}

iso_serde!(CalendarDate, TimeOfDay, LocalMoment);

impl<P: IntervalPoint + Iso8601> Serialize for Interval<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_iso(self, serializer)
    }
}

impl<'de, P: IntervalPoint + Iso8601> Deserialize<'de> for Interval<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_iso(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{DateInterval, MomentInterval};

    #[test]
    fn test_json_strings() {
        let d = CalendarDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-01-05\"");
        let t = TimeOfDay::from_hms_micro(9, 0, 1, 500_000).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:00:01.5\"");
        let i = DateInterval::half_open_right(d, d.add_days(4)).unwrap();
        assert_eq!(
            serde_json::to_string(&i).unwrap(),
            "\"[2024-01-05, 2024-01-09)\""
        );
    }

    #[test]
    fn test_json_parse() {
        let m: LocalMoment = serde_json::from_str("\"2024-01-05T09:30\"").unwrap();
        assert_eq!(m.time().minute(), 30);
        let i: MomentInterval =
            serde_json::from_str("\"(2024-01-05T09:30, 2024-01-06T09:30)\"").unwrap();
        assert_eq!(i.duration_in_hours(), 24);
        let err = serde_json::from_str::<CalendarDate>("\"2023-02-29\"").unwrap_err();
        assert!(err.to_string().contains("not a valid calendar date"));
    }
}
