//! Test-support hook that deliberately breaks an `IntSet`.
//!
//! Only compiled for tests or with the `diagnostics` feature.  After any
//! corruption, everything but `invariant_holds` is unspecified.

use super::IntSet;
use crate::errors::CorruptionError;
use crate::Interval;
use tracing::warn;

/// The ways `IntSet::invalidate` can corrupt a set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Corruption {
    /// Append a placeholder slot (inverted bounds) standing in for a missing interval.
    InsertAbsent,
    /// Append `[3,5]` at the end, without merging or sorting.
    AppendUnnormalized,
    /// Delete the second stored interval.  Needs at least two.
    RemoveSecond,
    /// Drop every interval, keeping the cached count.
    ClearIntervals,
    ZeroCount,
    /// Set the cached count to the bit pattern of -3.
    NegativeCount,
    /// Set the cached count to 50.
    InflateCount,
    /// Replace the interval storage with a fresh, unallocated vector.
    DropStorage,
}

impl IntSet {
    /// Corrupt the internal state of this set.  For exercising
    /// `invariant_holds` only; never call this outside of tests.
    pub fn invalidate(&mut self, corruption: Corruption) -> Result<(), CorruptionError> {
        match corruption {
            Corruption::InsertAbsent => self.intervals.push(Interval::from_raw_bounds(1, 0)),
            Corruption::AppendUnnormalized => {
                self.intervals.push(Interval::from_raw_bounds(3, 5))
            }
            Corruption::RemoveSecond => {
                if self.intervals.len() < 2 {
                    return Err(CorruptionError::TooFewIntervals {
                        needed: 2,
                        found: self.intervals.len(),
                    });
                }
                self.intervals.remove(1);
            }
            Corruption::ClearIntervals => self.intervals.clear(),
            Corruption::ZeroCount => self.count = 0,
            Corruption::NegativeCount => self.count = -3_i64 as u64,
            Corruption::InflateCount => self.count = 50,
            Corruption::DropStorage => self.intervals = Vec::new(),
        }
        warn!(?corruption, "invalidated set");
        Ok(())
    }
}
