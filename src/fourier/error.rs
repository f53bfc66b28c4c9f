use thiserror::Error;

/// Errors raised by the sample and series operations.
///
/// Every variant signals caller misuse (malformed input data) rather than a
/// transient condition; none of them are retryable, and no operation returns
/// a partial result alongside one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// Samples can only be combined when they were taken at the same
    /// coordinate.
    #[error("cannot combine samples taken at coordinates {left} and {right}")]
    MismatchedCoordinate { left: f64, right: f64 },

    /// A lookup by coordinate matched no sample in the series.
    #[error("no sample found at coordinate {coordinate}")]
    CoordinateNotFound { coordinate: f64 },

    /// The step size is derived from the first two samples of a series.
    #[error("step size requires at least 2 samples, series holds {len}")]
    InsufficientSamples { len: usize },
}
