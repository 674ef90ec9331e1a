//! Floor division and floor modulo.
//!
//! Native `/` and `%` truncate toward zero, which breaks wrap-around on
//! negative offsets (`-1 / 24 == 0`, `-1 % 24 == -1`).  The helpers here
//! round the quotient toward negative infinity so that the remainder always
//! carries the sign of the divisor.

use num_traits::{PrimInt, Signed};

/// Quotient of `a / b` rounded toward negative infinity.
///
/// ```
/// use lt_core::math::floor_div;
/// assert_eq!(floor_div(7, 2), 3);
/// assert_eq!(floor_div(-7, 2), -4);
/// assert_eq!(floor_div(7, -2), -4);
/// ```
///
/// # Panics
/// Panics if `b` is zero.
pub fn floor_div<T: PrimInt + Signed>(a: T, b: T) -> T {
    let q = a / b;
    if (a % b != T::zero()) && ((a < T::zero()) != (b < T::zero())) {
        q - T::one()
    } else {
        q
    }
}

/// Remainder of `a / b` with the sign of `b`.
///
/// ```
/// use lt_core::math::floor_mod;
/// assert_eq!(floor_mod(-1, 24), 23);
/// assert_eq!(floor_mod(25, 24), 1);
/// assert_eq!(floor_mod(1, -24), -23);
/// ```
///
/// # Panics
/// Panics if `b` is zero.
pub fn floor_mod<T: PrimInt + Signed>(a: T, b: T) -> T {
    a - floor_div(a, b) * b
}

/// `(floor_div(a, b), floor_mod(a, b))` in one call.
pub fn floor_div_mod<T: PrimInt + Signed>(a: T, b: T) -> (T, T) {
    let q = floor_div(a, b);
    (q, a - q * b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_division() {
        assert_eq!(floor_div(-48_i64, 24), -2);
        assert_eq!(floor_mod(-48_i64, 24), 0);
        assert_eq!(floor_div_mod(48_i32, 24), (2, 0));
    }

    #[test]
    fn test_negative_dividend() {
        assert_eq!(floor_div_mod(-1_i64, 86_400), (-1, 86_399));
        assert_eq!(floor_div_mod(-86_401_i64, 86_400), (-2, 86_399));
    }

    proptest! {
        #[test]
        fn remainder_has_divisor_sign(a in -1_000_000_i64..1_000_000, b in 1_i64..10_000) {
            let (q, r) = floor_div_mod(a, b);
            prop_assert!(r >= 0 && r < b);
            prop_assert_eq!(q * b + r, a);
            prop_assert_eq!(q, a.div_euclid(b));
        }

        #[test]
        fn negative_divisor(a in -1_000_000_i64..1_000_000, b in -10_000_i64..-1) {
            let (q, r) = floor_div_mod(a, b);
            prop_assert!(r <= 0 && r > b);
            prop_assert_eq!(q * b + r, a);
        }
    }
}
