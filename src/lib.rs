//! Natural cubic spline interpolation through ordered sample points.
//!
//! A [Spline] is built once from `n + 1` samples with strictly increasing `x`
//! and then queried at single points or resampled densely with a fixed step.
//!
//! # Example
//! ```
//! use natural_spline::Spline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let spline = Spline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
//!
//! assert_eq!(1.0, spline.evaluate(1.0).unwrap());
//! assert_approx_eq!(0.5625, spline.evaluate(0.5).unwrap(), 1e-12);
//! assert!(spline.evaluate(3.0).is_err());
//!
//! let (x, y) = spline.evaluate_range(0.25).unwrap();
//! assert_eq!(8, x.len());
//! assert_eq!(x.len(), y.len());
//! ```

mod builder;
mod error;
mod knot;
mod polynomial;
mod spline;

pub use builder::{Curvature, SplineBuilder};
pub use error::{Result, SplineError};
pub use knot::{Knot, SampleSet};
pub use polynomial::IntervalCoefficients;
pub use spline::{IntervalLookup, Spline, SplineOptions, MAX_RANGE_POINTS};
