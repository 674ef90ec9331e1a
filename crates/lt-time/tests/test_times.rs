//! Integration tests for `TimeOfDay` wrap-around arithmetic.

use lt_time::{Iso8601, TimeOfDay};
use proptest::prelude::*;

fn time(h: u8, m: u8, s: u8) -> TimeOfDay {
    TimeOfDay::from_hms(h, m, s).unwrap()
}

#[test]
fn hour_wrap() {
    assert_eq!(time(23, 0, 0).add_hours(2), time(1, 0, 0));
    assert_eq!(time(0, 0, 0).add_hours(-1), time(23, 0, 0));
}

#[test]
fn second_wrap() {
    assert_eq!(time(23, 59, 59).add_seconds(1), time(0, 0, 0));
    assert_eq!(time(0, 0, 0).add_seconds(-86_401), time(23, 59, 59));
}

#[test]
fn every_second_of_day_round_trips() {
    for sod in 0..86_400 {
        let t = TimeOfDay::from_second_of_day(sod, 0);
        assert_eq!(t.to_second_of_day(), sod);
        assert_eq!(t.to_iso_string().parse::<TimeOfDay>().unwrap(), t);
    }
}

fn any_time() -> impl Strategy<Value = TimeOfDay> {
    (0i64..86_400, 0u32..1_000_000).prop_map(|(s, us)| TimeOfDay::from_second_of_day(s, us))
}

proptest! {
    #[test]
    fn micros_match_micro_of_day(t in any_time(), n in -10_000_000_000i64..10_000_000_000) {
        const DAY: i64 = 86_400_000_000;
        let expected = (t.to_micro_of_day() + n).rem_euclid(DAY);
        prop_assert_eq!(t.add_micros(n).to_micro_of_day(), expected);
    }

    #[test]
    fn add_then_sub_is_identity(t in any_time(), n in -1_000_000i64..1_000_000) {
        prop_assert_eq!(t.add_seconds(n).sub_seconds(n), t);
        prop_assert_eq!(t.add_minutes(n).sub_minutes(n), t);
        prop_assert_eq!(t.add_hours(n).sub_hours(n), t);
        prop_assert_eq!(t.add_micros(n).sub_micros(n), t);
    }

    #[test]
    fn hours_keep_minutes(t in any_time(), n in any::<i32>()) {
        let moved = t.add_hours(i64::from(n));
        prop_assert_eq!(moved.minute(), t.minute());
        prop_assert_eq!(moved.second(), t.second());
        prop_assert_eq!(moved.micro(), t.micro());
        prop_assert_eq!(i64::from(moved.hour()), (i64::from(t.hour()) + i64::from(n)).rem_euclid(24));
    }

    #[test]
    fn display_parses_back(t in any_time()) {
        prop_assert_eq!(t.to_string().parse::<TimeOfDay>().unwrap(), t);
    }
}
