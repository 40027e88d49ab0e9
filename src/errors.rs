use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IntervalError {
    #[error("Invalid range: low {low} is greater than high {high}")]
    InvalidRange { low: i32, high: i32 },
}

#[cfg(any(test, feature = "diagnostics"))]
#[derive(Error, Debug, PartialEq)]
pub enum CorruptionError {
    #[error("Corruption needs at least {needed} intervals, found {found}")]
    TooFewIntervals { needed: usize, found: usize },
}
