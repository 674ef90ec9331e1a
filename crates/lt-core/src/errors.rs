//! Error types for localtime.
//!
//! Every fallible constructor in the workspace reports failures through the
//! single [`Error`] enum defined here.  Each variant carries a stable
//! machine-readable [`code`](Error::code) and a parameterised message naming
//! the offending field, the provided value, and the allowed bound.
//!
//! The [`ensure!`](crate::ensure) macro is shorthand for an early return
//! from functions yielding [`Result`].

use thiserror::Error;

/// The top-level error type used throughout localtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric field fell outside its allowed inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending field (`"year"`, `"hour"`, …).
        field: &'static str,
        /// The value that was provided.
        value: i64,
        /// Smallest allowed value.
        min: i64,
        /// Largest allowed value.
        max: i64,
    },

    /// Every field was in range but the combination is not a real date
    /// (e.g. February 30th).
    #[error("{year}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// Day of the rejected date.
        day: u8,
    },

    /// An interval whose start lies after its end.
    #[error("interval start must be less than or equal to end ({from} > {to})")]
    InvalidInterval {
        /// ISO representation of the requested start.
        from: String,
        /// ISO representation of the requested end.
        to: String,
    },

    /// A time unit was applied to a value that has no such component.
    #[error("{unit} cannot be applied to {target}")]
    UnsupportedUnit {
        /// Display name of the unit.
        unit: String,
        /// Name of the value type.
        target: &'static str,
    },

    /// A string could not be parsed as ISO-8601.
    #[error("invalid ISO-8601 {kind}: {input:?}")]
    Parse {
        /// What was being parsed (`"date"`, `"time"`, …).
        kind: &'static str,
        /// The rejected input.
        input: String,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Stable identifier of the error kind, suitable for programmatic
    /// matching and for translation tables.
    pub fn code(&self) -> &'static str {
        match self {
            Error::OutOfRange { .. } => "out_of_range",
            Error::InvalidDate { .. } => "invalid_date",
            Error::InvalidInterval { .. } => "invalid_interval",
            Error::UnsupportedUnit { .. } => "unsupported_unit",
            Error::Parse { .. } => "parse",
            Error::Precondition(_) => "precondition",
        }
    }

    /// Check that `value` lies in `min..=max`, reporting `field` otherwise.
    ///
    /// ```
    /// use lt_core::Error;
    /// assert!(Error::check_range("month", 12, 1, 12).is_ok());
    /// let err = Error::check_range("month", 13, 1, 12).unwrap_err();
    /// assert_eq!(err.to_string(), "month must be between 1 and 12, got 13");
    /// ```
    pub fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            tracing::debug!(field, value, min, max, "value out of range");
            Err(Error::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }

    /// Build a [`Error::Parse`] for `input`.
    pub fn parse(kind: &'static str, input: &str) -> Self {
        tracing::debug!(kind, input, "rejected ISO-8601 input");
        Error::Parse {
            kind,
            input: input.to_owned(),
        }
    }
}

/// Shorthand `Result` type used throughout localtime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lt_core::{ensure, errors::Error};
/// fn positive(x: i64) -> lt_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let err = Error::OutOfRange {
            field: "hour",
            value: 24,
            min: 0,
            max: 23,
        };
        assert_eq!(err.code(), "out_of_range");
        assert_eq!(err.to_string(), "hour must be between 0 and 23, got 24");

        let err = Error::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.code(), "invalid_date");
        assert_eq!(err.to_string(), "2023-02-29 is not a valid calendar date");
    }

    #[test]
    fn test_interval_message() {
        let err = Error::InvalidInterval {
            from: "2024-02-01".into(),
            to: "2024-01-01".into(),
        };
        assert_eq!(err.code(), "invalid_interval");
        assert_eq!(
            err.to_string(),
            "interval start must be less than or equal to end (2024-02-01 > 2024-01-01)"
        );
    }

    #[test]
    fn test_check_range_bounds_are_inclusive() {
        assert!(Error::check_range("minute", 0, 0, 59).is_ok());
        assert!(Error::check_range("minute", 59, 0, 59).is_ok());
        assert_eq!(
            Error::check_range("minute", -1, 0, 59).unwrap_err().code(),
            "out_of_range"
        );
    }

    #[test]
    fn test_ensure() {
        fn checked(x: i64) -> Result<i64> {
            ensure!(x != 0, "x must be non-zero");
            Ok(x)
        }
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(0).unwrap_err(),
            Error::Precondition("x must be non-zero".into())
        );
        assert_eq!(checked(0).unwrap_err().code(), "precondition");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
