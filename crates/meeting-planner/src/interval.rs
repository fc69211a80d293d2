//! The `Interval` value type.

use std::fmt;

use serde::Serialize;

use crate::error::{PlannerError, Result};

/// A time range `[start, end)` with `start < end`.
///
/// Fields are private so the invariant holds for every value in circulation;
/// the only way in is [`Interval::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Build an interval.
    ///
    /// # Errors
    /// Returns `PlannerError::InvalidInterval` if `start >= end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start >= end {
            return Err(PlannerError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Length of the interval, always positive. Unsigned so that spans
    /// wider than `i64::MAX` (e.g. `[i64::MIN, 0)`) still fit.
    pub fn duration(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Build from bounds already known to satisfy `start < end`.
    pub(crate) fn from_ordered(start: i64, end: i64) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// Same interval with a new end. Callers only ever grow the end.
    pub(crate) fn with_end(self, end: i64) -> Self {
        debug_assert!(end > self.start);
        Self { start: self.start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_reversed() {
        assert_eq!(
            Interval::new(5, 5),
            Err(PlannerError::InvalidInterval { start: 5, end: 5 })
        );
        assert_eq!(
            Interval::new(10, 3),
            Err(PlannerError::InvalidInterval { start: 10, end: 3 })
        );
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = Interval::new(10, 20).unwrap();
        let b = Interval::new(20, 30).unwrap();
        let c = Interval::new(15, 25).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn duration_spans_the_full_integer_range() {
        assert_eq!(Interval::new(i64::MIN, 0).unwrap().duration(), 1 << 63);
        assert_eq!(
            Interval::new(i64::MIN, i64::MAX).unwrap().duration(),
            u64::MAX
        );
    }

    #[test]
    fn display_is_half_open() {
        assert_eq!(Interval::new(-5, 7).unwrap().to_string(), "[-5, 7)");
    }
}
