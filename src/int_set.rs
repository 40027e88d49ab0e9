#[cfg(any(test, feature = "diagnostics"))]
mod diagnostics;

#[cfg(any(test, feature = "diagnostics"))]
pub use diagnostics::Corruption;

use crate::Interval;
use std::any::Any;
use std::fmt;
use tracing::{debug, trace};

/// A mutable set of integers, stored as maximal runs of consecutive values.
///
/// The runs are kept sorted, with at least one missing integer between
/// neighbors, and `count` caches the total number of members.  Every
/// mutator re-checks this and panics if it does not hold.
///
/// An `IntSet` does no locking; callers sharing one across threads must
/// synchronize access themselves.
#[derive(Debug, Default)]
pub struct IntSet {
    intervals: Vec<Interval>,
    count: u64,
}

impl IntSet {
    pub fn new() -> Self {
        IntSet {
            intervals: Vec::new(),
            count: 0,
        }
    }

    /// Add every integer in `iv` to the set.
    pub fn add_all(&mut self, iv: Interval) {
        self.insert_run(iv);
        self.merge_neighbors();
        self.count = self.recount();
        trace!(%iv, runs = self.intervals.len(), size = self.count, "add_all");
        self.assert_invariant("add_all");
    }

    pub fn add(&mut self, n: i32) {
        self.add_all(Interval::point(n));
    }

    /// Remove every integer in `iv` from the set, whether present or not.
    pub fn remove_all(&mut self, iv: Interval) {
        // Narrowed as stored runs consume it; the caller's value is untouched.
        let mut rest = iv;
        let mut k = 0;
        while k < self.intervals.len() {
            let current = self.intervals[k];
            if !current.overlaps(&rest) {
                k += 1;
                continue;
            }

            let left = if current.low() < rest.low() {
                Some(Interval::from_raw_bounds(current.low(), rest.low() - 1))
            } else {
                None
            };
            let right = if current.high() > rest.high() {
                Some(Interval::from_raw_bounds(rest.high() + 1, current.high()))
            } else {
                None
            };
            match (left, right) {
                (Some(left), Some(right)) => {
                    debug!(%current, %left, %right, "splitting run");
                    self.intervals[k] = left;
                    self.intervals.insert(k + 1, right);
                }
                (Some(remainder), None) | (None, Some(remainder)) => {
                    self.intervals[k] = remainder;
                }
                (None, None) => {
                    self.intervals.remove(k);
                }
            }

            if current.high() >= rest.high() {
                break;
            }
            rest = Interval::from_raw_bounds(current.high() + 1, rest.high());
        }
        self.count = self.recount();
        trace!(%iv, runs = self.intervals.len(), size = self.count, "remove_all");
        self.assert_invariant("remove_all");
    }

    pub fn remove(&mut self, n: i32) {
        self.remove_all(Interval::point(n));
    }

    /// True if every integer in `iv` is in the set.
    pub fn contains_all(&self, iv: Interval) -> bool {
        // Runs are maximal, so a covered range always lies inside one run.
        self.intervals
            .iter()
            .any(|current| current.overlaps(&iv) && current.contains_interval(&iv))
    }

    pub fn contains(&self, n: i32) -> bool {
        self.contains_all(Interval::point(n))
    }

    /// Number of distinct integers in the set.
    pub fn size(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The stored maximal runs, in ascending order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// All members, in ascending order.
    pub fn to_vec(&self) -> Vec<i32> {
        self.members().collect()
    }

    /// An independent set with the same members.  The count is re-derived
    /// by inserting each run into a fresh set.
    pub fn copy(&self) -> IntSet {
        let mut copied = IntSet::new();
        for &iv in &self.intervals {
            copied.add_all(iv);
        }
        copied
    }

    /// Same size, and every run of `self` is covered by `other`.
    pub fn equals(&self, other: &IntSet) -> bool {
        self.size() == other.size() && self.intervals.iter().all(|&iv| other.contains_all(iv))
    }

    /// Like `equals`, but false for anything that is not an `IntSet`.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<IntSet>()
            .map_or(false, |other| self.equals(other))
    }

    /// Check the structural invariant:
    /// * every stored interval is well formed (none are missing),
    /// * `count` is the sum of the run sizes,
    /// * runs are ascending and neither overlap nor adjoin.
    ///
    /// Sorted order with a gap between each pair of neighbors means no two
    /// runs anywhere in the set overlap or adjoin, so one pass suffices.
    pub fn invariant_holds(&self) -> bool {
        if !self.intervals.iter().all(Interval::is_well_formed) {
            return false;
        }
        if self.recount() != self.count {
            return false;
        }
        self.intervals
            .windows(2)
            .all(|w| i64::from(w[0].high()) + 1 < i64::from(w[1].low()))
    }

    fn assert_invariant(&self, operation: &str) {
        assert!(
            self.invariant_holds(),
            "invariant violated after {}: {:?}",
            operation,
            self
        );
    }

    fn recount(&self) -> u64 {
        self.intervals.iter().map(Interval::size).sum()
    }

    fn members(&self) -> impl Iterator<Item = i32> + '_ {
        self.intervals.iter().flat_map(|iv| iv.low()..=iv.high())
    }

    /// Place `iv` at its sorted position, widening the first run it
    /// touches.  The result may still touch the following runs.
    fn insert_run(&mut self, iv: Interval) {
        let slot = self.intervals.iter().position(|current| {
            current.low() > iv.high() || current.overlaps(&iv) || current.adjoins(&iv)
        });
        match slot {
            Some(k) if self.intervals[k].overlaps(&iv) || self.intervals[k].adjoins(&iv) => {
                self.intervals[k] = self.intervals[k].hull(&iv);
            }
            Some(k) => self.intervals.insert(k, iv),
            None => self.intervals.push(iv),
        }
    }

    /// Sweep left to right, folding each run into its predecessor while
    /// the two overlap or adjoin.
    fn merge_neighbors(&mut self) {
        let mut t = 0;
        while t + 1 < self.intervals.len() {
            let (current, next) = (self.intervals[t], self.intervals[t + 1]);
            if current.overlaps(&next) || current.adjoins(&next) {
                debug!(%current, %next, "merging runs");
                self.intervals[t] = current.hull(&next);
                self.intervals.remove(t + 1);
            } else {
                t += 1;
            }
        }
    }
}

impl Clone for IntSet {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for IntSet {}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, n) in self.members().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "}}")
    }
}
