//! `Interval<P>`: a range of dates or moments with an inclusion policy.
//!
//! One generic algorithm handles containment, overlap and iteration for
//! every point type; [`DateInterval`] and [`MomentInterval`] are its two
//! instantiations.  Point types plug in through [`IntervalPoint`].
//!
//! The invariant `from <= to` holds for every boundary.  An `Open` interval
//! with `from == to` is therefore constructible even though nothing can be
//! contained in it.

use std::iter::FusedIterator;

use crate::boundary::IntervalBoundary;
use crate::date::CalendarDate;
use crate::moment::LocalMoment;
use crate::time::{MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::time_unit::TimeUnit;
use lt_core::ensure;
use lt_core::errors::{Error, Result};

/// A point type that intervals can be built over.
pub trait IntervalPoint: Copy + Ord + std::fmt::Display + std::fmt::Debug {
    /// End point used when an interval is created without one.
    const MAX: Self;

    /// Unit of one iteration step.
    const STEP: TimeUnit;

    /// Move by `n` units, failing when the result leaves the supported
    /// range or when `unit` does not apply to this point type.
    fn advance(self, n: i64, unit: TimeUnit) -> Result<Self>;
}

impl IntervalPoint for CalendarDate {
    const MAX: Self = CalendarDate::MAX;
    const STEP: TimeUnit = TimeUnit::Days;

    fn advance(self, n: i64, unit: TimeUnit) -> Result<Self> {
        self.checked_add(n, unit)
    }
}

impl IntervalPoint for LocalMoment {
    const MAX: Self = LocalMoment::MAX;
    const STEP: TimeUnit = TimeUnit::Days;

    fn advance(self, n: i64, unit: TimeUnit) -> Result<Self> {
        self.checked_add(n, unit)
    }
}

/// A range between two points of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<P> {
    from: P,
    to: P,
    boundary: IntervalBoundary,
}

/// A range of calendar dates.
pub type DateInterval = Interval<CalendarDate>;

/// A range of local moments.
pub type MomentInterval = Interval<LocalMoment>;

impl<P: IntervalPoint> Interval<P> {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create an interval; `to` defaults to [`IntervalPoint::MAX`].
    ///
    /// For moments the default end is 9999-12-31T23:59:59 exactly, so an
    /// open-ended interval cannot start later within that final second.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInterval`] if `from > to`.
    pub fn new(from: P, to: Option<P>, boundary: IntervalBoundary) -> Result<Self> {
        let to = to.unwrap_or(P::MAX);
        if from > to {
            tracing::debug!(%from, %to, %boundary, "rejected inverted interval");
            return Err(Error::InvalidInterval {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(Interval { from, to, boundary })
    }

    /// Trusted constructor; the caller guarantees `from <= to`.
    pub fn new_unchecked(from: P, to: P, boundary: IntervalBoundary) -> Self {
        debug_assert!(from <= to, "interval start {from} after end {to}");
        Interval { from, to, boundary }
    }

    /// `[from, to]`.
    pub fn closed(from: P, to: P) -> Result<Self> {
        Self::new(from, Some(to), IntervalBoundary::Closed)
    }

    /// `(from, to)`.
    pub fn open(from: P, to: P) -> Result<Self> {
        Self::new(from, Some(to), IntervalBoundary::Open)
    }

    /// `(from, to]`.
    pub fn half_open_left(from: P, to: P) -> Result<Self> {
        Self::new(from, Some(to), IntervalBoundary::HalfOpenLeft)
    }

    /// `[from, to)`.
    pub fn half_open_right(from: P, to: P) -> Result<Self> {
        Self::new(from, Some(to), IntervalBoundary::HalfOpenRight)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Start point.
    pub fn from(&self) -> P {
        self.from
    }

    /// End point.
    pub fn to(&self) -> P {
        self.to
    }

    /// Inclusion policy.
    pub fn boundary(&self) -> IntervalBoundary {
        self.boundary
    }

    /// The same endpoints under another inclusion policy.
    pub fn with_boundary(self, boundary: IntervalBoundary) -> Self {
        Interval { boundary, ..self }
    }

    // ── Membership ────────────────────────────────────────────────────────────

    /// Return `true` if `point` lies inside the interval.
    pub fn contains(&self, point: P) -> bool {
        let after_from = if self.boundary.includes_start() {
            point >= self.from
        } else {
            point > self.from
        };
        let before_to = if self.boundary.includes_end() {
            point <= self.to
        } else {
            point < self.to
        };
        after_from && before_to
    }

    /// Return `true` if every point of `self` precedes every point of
    /// `other`, taking the touching endpoints' inclusion into account.
    pub fn is_strictly_before(&self, other: &Self) -> bool {
        self.to < other.from
            || (self.to == other.from
                && (!self.boundary.includes_end() || !other.boundary.includes_start()))
    }

    /// Return `true` if the two intervals share at least one point.
    ///
    /// The relation is symmetric.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_strictly_before(other) || other.is_strictly_before(self) {
            return false;
        }
        let start_overlap = self.contains(other.from) || other.contains(self.from);
        let end_overlap = self.contains(other.to) || other.contains(self.to);
        let containment = (self.from <= other.from && self.to >= other.to)
            || (other.from <= self.from && other.to >= self.to);
        start_overlap || end_overlap || containment
    }

    // ── Iteration ─────────────────────────────────────────────────────────────

    /// Iterate over the member points, one [`IntervalPoint::STEP`] at a
    /// time.
    pub fn iter(&self) -> IntervalIter<P> {
        self.stepper(1, P::STEP)
    }

    /// Iterate over the member points in steps of `step` × `unit`.
    ///
    /// Every point is measured from the interval start, so a month-end
    /// start keeps its day wherever the target month allows it.  An
    /// excluded start is skipped by one `unit`; an excluded end is never
    /// yielded.
    ///
    /// # Errors
    /// Fails if `step` is not positive or `unit` does not apply to `P`.
    pub fn iter_by(&self, step: i64, unit: TimeUnit) -> Result<IntervalIter<P>> {
        ensure!(step > 0, "iteration step must be positive, got {step}");
        self.from.advance(0, unit)?;
        Ok(self.stepper(step, unit))
    }

    fn stepper(&self, step: i64, unit: TimeUnit) -> IntervalIter<P> {
        IntervalIter {
            origin: self.from,
            offset: i64::from(!self.boundary.includes_start()),
            index: 0,
            end: self.to,
            includes_end: self.boundary.includes_end(),
            step,
            unit,
            done: false,
        }
    }
}

// ── Dates ─────────────────────────────────────────────────────────────────────

impl Interval<CalendarDate> {
    /// Number of member days.
    ///
    /// `Closed` counts both endpoints; every excluded endpoint removes one
    /// day, never going below zero.
    pub fn days(&self) -> i64 {
        let inclusive = self.to.to_epoch_day() - self.from.to_epoch_day() + 1;
        (inclusive - self.boundary.excluded_endpoints()).max(0)
    }

    /// Alias of [`days`](Self::days).
    pub fn count(&self) -> i64 {
        self.days()
    }
}

// ── Moments ───────────────────────────────────────────────────────────────────

impl Interval<LocalMoment> {
    /// Span from `from` to `to` in microseconds.
    pub fn duration_in_micros(&self) -> i64 {
        self.to.to_epoch_micro() - self.from.to_epoch_micro()
    }

    /// Span in whole seconds, truncated.  Durations measure the continuous
    /// span and do not depend on the boundary.
    pub fn duration_in_seconds(&self) -> i64 {
        self.duration_in_micros() / MICROS_PER_SECOND
    }

    /// Span in whole minutes.
    pub fn duration_in_minutes(&self) -> i64 {
        self.duration_in_seconds() / SECONDS_PER_MINUTE
    }

    /// Span in whole hours.
    pub fn duration_in_hours(&self) -> i64 {
        self.duration_in_seconds() / SECONDS_PER_HOUR
    }

    /// Span in whole days.
    pub fn duration_in_days(&self) -> i64 {
        self.duration_in_seconds() / SECONDS_PER_DAY
    }
}

// ── Iterator ──────────────────────────────────────────────────────────────────

/// Lazy forward iterator over the points of an [`Interval`].
///
/// The `k`-th point is `origin + (offset + k·step)` units.
#[derive(Debug, Clone)]
pub struct IntervalIter<P> {
    origin: P,
    offset: i64,
    index: i64,
    end: P,
    includes_end: bool,
    step: i64,
    unit: TimeUnit,
    done: bool,
}

impl<P: IntervalPoint> Iterator for IntervalIter<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.done {
            return None;
        }
        let point = self
            .step
            .checked_mul(self.index)
            .and_then(|n| n.checked_add(self.offset))
            .and_then(|n| self.origin.advance(n, self.unit).ok());
        match point {
            Some(p) if p < self.end || (self.includes_end && p == self.end) => {
                self.index += 1;
                Some(p)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl<P: IntervalPoint> FusedIterator for IntervalIter<P> {}

impl<P: IntervalPoint> IntoIterator for Interval<P> {
    type Item = P;
    type IntoIter = IntervalIter<P>;

    fn into_iter(self) -> IntervalIter<P> {
        self.iter()
    }
}

impl<P: IntervalPoint> IntoIterator for &Interval<P> {
    type Item = P;
    type IntoIter = IntervalIter<P>;

    fn into_iter(self) -> IntervalIter<P> {
        self.iter()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl<P: IntervalPoint> std::fmt::Display for Interval<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            self.boundary.left_bracket(),
            self.from,
            self.to,
            self.boundary.right_bracket()
        )
    }
}
