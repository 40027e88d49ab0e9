use crate::errors::IntervalError;
use std::convert::TryFrom;
use std::fmt;

/// A closed range of integers `[low, high]`, with `low <= high`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    low: i32,
    high: i32,
}

impl From<i32> for Interval {
    fn from(n: i32) -> Self {
        Interval::point(n)
    }
}

impl TryFrom<(i32, i32)> for Interval {
    type Error = IntervalError;

    fn try_from(bounds: (i32, i32)) -> Result<Self, Self::Error> {
        Interval::new(bounds.0, bounds.1)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

impl Interval {
    pub fn new(low: i32, high: i32) -> Result<Self, IntervalError> {
        if low > high {
            Err(IntervalError::InvalidRange { low, high })
        } else {
            Ok(Interval { low, high })
        }
    }

    pub fn point(n: i32) -> Self {
        Interval { low: n, high: n }
    }

    /// Build an interval without checking the bounds.  Callers must
    /// guarantee `low <= high`, except for the diagnostics hook, which
    /// uses inverted bounds to stand in for a missing interval.
    pub(crate) fn from_raw_bounds(low: i32, high: i32) -> Self {
        Interval { low, high }
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    /// Number of integers covered.
    pub fn size(&self) -> u64 {
        (i64::from(self.high) - i64::from(self.low) + 1) as u64
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.low <= self.high
    }

    pub fn contains(&self, n: i32) -> bool {
        self.low <= n && n <= self.high
    }

    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// True if the two intervals are disjoint with no integer between them.
    pub fn adjoins(&self, other: &Interval) -> bool {
        // Widen so that i32::MAX + 1 does not wrap.
        i64::from(self.high) + 1 == i64::from(other.low)
            || i64::from(other.high) + 1 == i64::from(self.low)
    }

    /// The smallest interval covering both.
    pub(crate) fn hull(&self, other: &Interval) -> Interval {
        Interval {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}
