mod int_set;
mod interval;

pub mod errors;

#[cfg(any(test, feature = "diagnostics"))]
pub use int_set::Corruption;
pub use int_set::IntSet;
pub use interval::Interval;
