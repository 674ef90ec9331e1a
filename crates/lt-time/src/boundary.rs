//! `IntervalBoundary`: which endpoints an interval includes.

use lt_core::errors::{Error, Result};

/// Inclusion policy for the two endpoints of an
/// [`Interval`](crate::interval::Interval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalBoundary {
    /// `[a, b]`: both endpoints included.
    #[default]
    Closed,
    /// `(a, b)`: both endpoints excluded.
    Open,
    /// `(a, b]`: start excluded, end included.
    HalfOpenLeft,
    /// `[a, b)`: start included, end excluded.
    HalfOpenRight,
}

impl IntervalBoundary {
    /// All four variants.
    pub const ALL: [IntervalBoundary; 4] = [
        IntervalBoundary::Closed,
        IntervalBoundary::Open,
        IntervalBoundary::HalfOpenLeft,
        IntervalBoundary::HalfOpenRight,
    ];

    /// Whether the start point is a member of the interval.
    pub fn includes_start(self) -> bool {
        matches!(self, IntervalBoundary::Closed | IntervalBoundary::HalfOpenRight)
    }

    /// Whether the end point is a member of the interval.
    pub fn includes_end(self) -> bool {
        matches!(self, IntervalBoundary::Closed | IntervalBoundary::HalfOpenLeft)
    }

    /// Number of excluded endpoints (0, 1 or 2).
    pub fn excluded_endpoints(self) -> i64 {
        match self {
            IntervalBoundary::Closed => 0,
            IntervalBoundary::HalfOpenLeft | IntervalBoundary::HalfOpenRight => 1,
            IntervalBoundary::Open => 2,
        }
    }

    /// `[` or `(`.
    pub fn left_bracket(self) -> char {
        if self.includes_start() {
            '['
        } else {
            '('
        }
    }

    /// `]` or `)`.
    pub fn right_bracket(self) -> char {
        if self.includes_end() {
            ']'
        } else {
            ')'
        }
    }

    /// Recover the boundary from its bracket pair, e.g. `('[', ')')`.
    pub fn from_brackets(left: char, right: char) -> Result<Self> {
        match (left, right) {
            ('[', ']') => Ok(IntervalBoundary::Closed),
            ('(', ')') => Ok(IntervalBoundary::Open),
            ('(', ']') => Ok(IntervalBoundary::HalfOpenLeft),
            ('[', ')') => Ok(IntervalBoundary::HalfOpenRight),
            _ => Err(Error::parse("interval brackets", &format!("{left}{right}"))),
        }
    }
}

impl std::fmt::Display for IntervalBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IntervalBoundary::Closed => "closed",
            IntervalBoundary::Open => "open",
            IntervalBoundary::HalfOpenLeft => "half-open-left",
            IntervalBoundary::HalfOpenRight => "half-open-right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_roundtrip() {
        for boundary in IntervalBoundary::ALL {
            let parsed =
                IntervalBoundary::from_brackets(boundary.left_bracket(), boundary.right_bracket());
            assert_eq!(parsed.unwrap(), boundary);
        }
        assert!(IntervalBoundary::from_brackets(']', '[').is_err());
    }

    #[test]
    fn test_inclusion_table() {
        use IntervalBoundary::*;
        assert!(Closed.includes_start() && Closed.includes_end());
        assert!(!Open.includes_start() && !Open.includes_end());
        assert!(!HalfOpenLeft.includes_start() && HalfOpenLeft.includes_end());
        assert!(HalfOpenRight.includes_start() && !HalfOpenRight.includes_end());
        assert_eq!(Open.excluded_endpoints(), 2);
    }
}
