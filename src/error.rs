use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplineError>;

/// Errors returned while building or querying a [Spline](crate::Spline).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplineError {
    /// Fewer than two samples were supplied, so there is no interval to fit.
    #[error("Spline must have at least 2 knots, got {count}")]
    InsufficientPoints { count: usize },

    #[error("x and y must have the same length, got {x_len} and {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    /// `x[index]` is not strictly greater than `x[index - 1]`.
    #[error("x values must be strictly increasing, violated at index {index}")]
    NonMonotonicInput { index: usize },

    #[error("x = {query} is out of range [{min}, {max}]")]
    OutOfDomain { query: f64, min: f64, max: f64 },

    #[error("step must be positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("derivative of order {order} is not supported, expected 0, 1 or 2")]
    UnsupportedDerivativeOrder { order: usize },
}
