use crate::error::{Result, SplineError};

/// Knot represents a point through which the spline passes.
/// - `x` - coordinate,
/// - `y` - coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Knot {
    fn from((x, y): (f64, f64)) -> Self {
        Knot { x, y }
    }
}

/// Ordered sample coordinates the spline is fitted through.
///
/// Construction guarantees `x.len() == y.len() >= 2` and strictly increasing `x`.
/// Samples are never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// # Errors
    /// - [SplineError::DimensionMismatch] when `x` and `y` lengths differ,
    /// - [SplineError::InsufficientPoints] for fewer than 2 samples,
    /// - [SplineError::NonMonotonicInput] when `x` is not strictly increasing.
    ///
    /// ```
    /// use natural_spline::{SampleSet, SplineError};
    ///
    /// assert!(SampleSet::new(vec![0.0, 1.0], vec![2.0, 3.0]).is_ok());
    /// assert_eq!(
    ///     SampleSet::new(vec![0.0, 0.0], vec![2.0, 3.0]),
    ///     Err(SplineError::NonMonotonicInput { index: 1 })
    /// );
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(SplineError::DimensionMismatch { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(SplineError::InsufficientPoints { count: x.len() });
        }

        // written as a negated comparison so NaN fails as well
        if let Some(index) = x.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(SplineError::NonMonotonicInput { index: index + 1 });
        }

        Ok(SampleSet { x, y })
    }

    pub fn from_knots(knots: Vec<Knot>) -> Result<Self> {
        let (x, y): (Vec<f64>, Vec<f64>) = knots.iter().map(|k| (k.x(), k.y())).unzip();
        SampleSet::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of samples, `n + 1`.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`, a valid set holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn number_of_intervals(&self) -> usize {
        self.x.len() - 1
    }

    pub fn knots(&self) -> impl Iterator<Item = Knot> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| Knot { x, y })
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let samples = SampleSet::new(vec![0.0, 1.0, 2.5], vec![4.0, 2.0, 6.0]).unwrap();

        assert_eq!(3, samples.len());
        assert_eq!(2, samples.number_of_intervals());
        assert_eq!(0.0, samples.min_x());
        assert_eq!(2.5, samples.max_x());
        assert_eq!(&[4.0, 2.0, 6.0], samples.y());
    }

    #[test]
    fn test_from_knots() {
        let knots = vec![Knot::new(0.0, 1.0), Knot::new(1.0, -1.0), (2.0, 0.5).into()];
        let samples = SampleSet::from_knots(knots.clone()).unwrap();

        assert_eq!(&[0.0, 1.0, 2.0], samples.x());
        assert_eq!(knots, samples.knots().collect::<Vec<_>>());
    }

    #[test]
    fn test_knot_coordinates() {
        let knot = Knot::from((1.5, -2.0));

        assert_eq!(1.5, knot.x());
        assert_eq!(-2.0, knot.y());
        assert_eq!(Knot::new(1.5, -2.0), knot);
    }

    #[test]
    fn test_single_point() {
        let samples = SampleSet::new(vec![0.0], vec![0.0]);
        assert_eq!(Err(SplineError::InsufficientPoints { count: 1 }), samples);
    }

    #[test]
    fn test_empty() {
        let samples = SampleSet::new(vec![], vec![]);
        assert_eq!(Err(SplineError::InsufficientPoints { count: 0 }), samples);
    }

    #[test]
    fn test_dimension_mismatch() {
        let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]);
        assert_eq!(Err(SplineError::DimensionMismatch { x_len: 3, y_len: 2 }), samples);
    }

    #[test]
    fn test_equal_x_values() {
        let samples = SampleSet::new(vec![0.0, 1.0, 1.0, 2.0], vec![0.0; 4]);
        assert_eq!(Err(SplineError::NonMonotonicInput { index: 2 }), samples);
    }

    #[test]
    fn test_decreasing_x_values() {
        let samples = SampleSet::new(vec![0.0, 2.0, 1.0], vec![0.0; 3]);
        assert_eq!(Err(SplineError::NonMonotonicInput { index: 2 }), samples);
    }

    #[test]
    fn test_nan_x_value() {
        let samples = SampleSet::new(vec![0.0, f64::NAN, 1.0], vec![0.0; 3]);
        assert_eq!(Err(SplineError::NonMonotonicInput { index: 1 }), samples);
    }
}
