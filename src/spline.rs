use tracing::trace;

use crate::{
    builder::{Curvature, SplineBuilder},
    error::{Result, SplineError},
    knot::{Knot, SampleSet},
    polynomial::IntervalCoefficients,
};

/// Upper bound on the number of points [Spline::evaluate_range] produces.
pub const MAX_RANGE_POINTS: usize = 1 << 24;

/// Rule used by point queries to pick the interval polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalLookup {
    /// Index of the first knot with `x_i >= query`, so a query strictly inside
    /// `(x_{i-1}, x_i)` evaluates `S_i` at a negative offset. Reproduces the
    /// behaviour of existing resampled data; use [IntervalLookup::Containing]
    /// for the polynomial that actually owns the query.
    ///
    /// `S_n` does not exist, so queries in `(x_{n-1}, x_n]` fall back to the owning
    /// interval `S_{n-1}` at a non-negative offset, the same as `Containing`.
    #[default]
    FirstKnotAtOrAbove,
    /// Largest index with `x_i <= query`.
    Containing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplineOptions {
    pub curvature: Curvature,
    pub lookup: IntervalLookup,
}

impl SplineOptions {
    pub fn new(curvature: Curvature, lookup: IntervalLookup) -> Self {
        SplineOptions { curvature, lookup }
    }
}

/// Natural cubic spline through a [SampleSet]. Immutable once built, so it can be
/// shared between threads for querying.
#[derive(Debug, Clone)]
pub struct Spline {
    samples: SampleSet,
    coefficients: Vec<IntervalCoefficients>,
    options: SplineOptions,
}

impl Spline {
    /// Builds a spline with default [SplineOptions].
    /// # Errors
    /// Same as [SampleSet::new].
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Spline::with_options(x, y, SplineOptions::default())
    }

    pub fn with_options(x: Vec<f64>, y: Vec<f64>, options: SplineOptions) -> Result<Self> {
        let samples = SampleSet::new(x, y)?;
        Ok(Spline::from_samples(samples, options))
    }

    /// Knots are used in the given order, they are not sorted.
    pub fn from_knots(knots: Vec<Knot>) -> Result<Self> {
        let samples = SampleSet::from_knots(knots)?;
        Ok(Spline::from_samples(samples, SplineOptions::default()))
    }

    pub fn from_samples(samples: SampleSet, options: SplineOptions) -> Self {
        let coefficients = SplineBuilder::new(options.curvature).build(&samples);
        Spline { samples, coefficients, options }
    }

    /// # Errors
    /// [SplineError::OutOfDomain] when `x` lies outside `[x_0, x_n]`.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.check_in_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.evaluate_in_interval(index, x))
    }

    /// Value (`order == 0`), slope or curvature of the polynomial selected for `x`.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64> {
        if order > 2 {
            return Err(SplineError::UnsupportedDerivativeOrder { order });
        }
        self.check_in_range(x)?;

        let index = self.find_interval_index(x);
        let t = x - self.samples.x()[index];
        let polynomial = &self.coefficients[index];
        Ok(match order {
            0 => polynomial.value(t),
            1 => polynomial.first_derivative(t),
            _ => polynomial.second_derivative(t),
        })
    }

    /// Evaluates every query, reusing the previous interval as a starting guess.
    /// Nothing is evaluated if any query is out of range.
    pub fn evaluate_many(&self, x_values: &[f64]) -> Result<Vec<f64>> {
        if let Some(&x) = x_values.iter().find(|x| !self.is_in_range(**x)) {
            return Err(self.out_of_domain(x));
        }

        let mut results = Vec::with_capacity(x_values.len());
        let mut index = 0;
        for &x in x_values {
            index = self.find_interval_index_with_hint(index, x);
            results.push(self.evaluate_in_interval(index, x));
        }
        Ok(results)
    }

    /// Samples every interval `i` at `x_i, x_i + step, ...` strictly below `x_{i+1}`.
    /// Interval polynomials are evaluated at their own non-negative offsets, and the
    /// last knot `x_n` is never part of the output.
    /// The output holds about `(x_n - x_0) / step` points.
    /// # Errors
    /// [SplineError::InvalidStep] when `step` is not a finite positive number, or is so
    /// small that the output would exceed [MAX_RANGE_POINTS].
    pub fn evaluate_range(&self, step: f64) -> Result<(Vec<f64>, Vec<f64>)> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(SplineError::InvalidStep { step });
        }

        // at most ceil(h_i / step) points per interval
        let (min, max) = self.domain();
        let estimate = (max - min) / step + self.coefficients.len() as f64;
        if !(estimate <= MAX_RANGE_POINTS as f64) {
            return Err(SplineError::InvalidStep { step });
        }

        let knots_x = self.samples.x();
        let mut x_values = Vec::with_capacity(estimate as usize);
        let mut y_values = Vec::with_capacity(estimate as usize);

        for (i, polynomial) in self.coefficients.iter().enumerate() {
            let (start, end) = (knots_x[i], knots_x[i + 1]);
            let mut k = 0usize;
            loop {
                let offset = k as f64 * step;
                let x = start + offset;
                if x >= end {
                    break;
                }
                x_values.push(x);
                y_values.push(polynomial.value(offset));
                k += 1;
            }
        }

        trace!(points = x_values.len(), step, "resampled spline");
        Ok((x_values, y_values))
    }

    pub fn knots_x(&self) -> &[f64] {
        self.samples.x()
    }

    pub fn knots_y(&self) -> &[f64] {
        self.samples.y()
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn coefficients(&self) -> &[IntervalCoefficients] {
        &self.coefficients
    }

    pub fn number_of_intervals(&self) -> usize {
        self.coefficients.len()
    }

    /// `(x_0, x_n)`
    pub fn domain(&self) -> (f64, f64) {
        (self.samples.min_x(), self.samples.max_x())
    }

    pub fn options(&self) -> SplineOptions {
        self.options
    }

    fn evaluate_in_interval(&self, index: usize, x: f64) -> f64 {
        self.coefficients[index].value(x - self.samples.x()[index])
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.samples.min_x() <= x && x <= self.samples.max_x()
    }

    fn check_in_range(&self, x: f64) -> Result<()> {
        if self.is_in_range(x) {
            Ok(())
        } else {
            Err(self.out_of_domain(x))
        }
    }

    fn out_of_domain(&self, query: f64) -> SplineError {
        let (min, max) = self.domain();
        SplineError::OutOfDomain { query, min, max }
    }

    // x must be in range; index n is clamped to n - 1, which covers (x_{n-1}, x_n]
    fn find_interval_index(&self, x: f64) -> usize {
        let knots_x = self.samples.x();
        let index = match self.options.lookup {
            IntervalLookup::FirstKnotAtOrAbove => knots_x.partition_point(|&v| v < x),
            IntervalLookup::Containing => knots_x.partition_point(|&v| v <= x).saturating_sub(1),
        };
        index.min(self.coefficients.len() - 1)
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_selected_interval(index_hint, x) {
            index_hint
        } else if index_hint + 1 < self.coefficients.len()
            && self.is_selected_interval(index_hint + 1, x)
        {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }

    fn is_selected_interval(&self, index: usize, x: f64) -> bool {
        let knots_x = self.samples.x();
        let last = self.coefficients.len() - 1;
        match self.options.lookup {
            IntervalLookup::FirstKnotAtOrAbove => {
                (index == 0 || knots_x[index - 1] < x) && (index == last || x <= knots_x[index])
            }
            IntervalLookup::Containing => {
                knots_x[index] <= x && (index == last || x < knots_x[index + 1])
            }
        }
    }
}
