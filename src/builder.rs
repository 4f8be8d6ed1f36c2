use nalgebra::DVector;
use tracing::debug;

use crate::{knot::SampleSet, polynomial::IntervalCoefficients};

/// How the second derivative at every knot is obtained before the interval
/// coefficients are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curvature {
    /// Solves the natural spline tridiagonal system. The result interpolates both
    /// interval ends, is C² at every interior knot and has zero curvature at `x_0`, `x_n`.
    #[default]
    Exact,
    /// Interior curvature `3 * (s_{i+1} - s_i) / (h_i + h_{i+1})` with zeros placed
    /// at both ends, and `d_i = Γ_{i+1} - (Γ_i / 6) * h_i`. Kept for bit compatibility
    /// with data produced by that formula; it is neither exactly C² nor guaranteed to
    /// hit `y_{i+1}` at the right end of an interval.
    Shortcut,
}

/// Derives one [IntervalCoefficients] per interval of a [SampleSet].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplineBuilder {
    curvature: Curvature,
}

impl SplineBuilder {
    pub fn new(curvature: Curvature) -> Self {
        SplineBuilder { curvature }
    }

    pub fn curvature(&self) -> Curvature {
        self.curvature
    }

    /// Returns `n` coefficient sets for `n + 1` samples. `a_i == y_i` for every interval.
    pub fn build(&self, samples: &SampleSet) -> Vec<IntervalCoefficients> {
        let x = samples.x();
        let y = samples.y();

        let widths: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let slopes: Vec<f64> = y
            .windows(2)
            .zip(widths.iter())
            .map(|(w, h)| (w[1] - w[0]) / h)
            .collect();

        let curvatures = match self.curvature {
            Curvature::Exact => exact_curvatures(&widths, &slopes),
            Curvature::Shortcut => shortcut_curvatures(&widths, &slopes),
        };

        debug!(
            knots = samples.len(),
            curvature = ?self.curvature,
            "calculated knot curvatures"
        );

        widths
            .iter()
            .enumerate()
            .map(|(i, &h)| {
                let g0 = curvatures[i];
                let g1 = curvatures[i + 1];
                let d = match self.curvature {
                    Curvature::Exact => (g1 - g0) / (6.0 * h),
                    Curvature::Shortcut => g1 - g0 / 6.0 * h,
                };
                let b = slopes[i] - h * (2.0 * g0 + g1) / 6.0;
                IntervalCoefficients::new(y[i], b, g0 / 2.0, d)
            })
            .collect()
    }
}

/// Second derivatives `M_0..=M_n` of the natural spline. Interior knots satisfy
/// `h_{i-1} M_{i-1} + 2 (h_{i-1} + h_i) M_i + h_i M_{i+1} = 6 (s_i - s_{i-1})`.
fn exact_curvatures(widths: &[f64], slopes: &[f64]) -> Vec<f64> {
    let number_of_intervals = widths.len();
    let mut curvatures = vec![0.0; number_of_intervals + 1];
    if number_of_intervals < 2 {
        return curvatures;
    }

    let interior = number_of_intervals - 1;
    let sub = DVector::from_fn(interior, |k, _| widths[k]);
    let diag = DVector::from_fn(interior, |k, _| 2.0 * (widths[k] + widths[k + 1]));
    let sup = DVector::from_fn(interior, |k, _| widths[k + 1]);
    let rhs = DVector::from_fn(interior, |k, _| 6.0 * (slopes[k + 1] - slopes[k]));

    let solution = solve_tridiagonal(&sub, &diag, &sup, &rhs);
    curvatures[1..number_of_intervals].copy_from_slice(solution.as_slice());
    curvatures
}

fn shortcut_curvatures(widths: &[f64], slopes: &[f64]) -> Vec<f64> {
    let mut curvatures = Vec::with_capacity(widths.len() + 1);
    curvatures.push(0.0);
    for i in 0..widths.len().saturating_sub(1) {
        curvatures.push(3.0 * (slopes[i + 1] - slopes[i]) / (widths[i] + widths[i + 1]));
    }
    curvatures.push(0.0);
    curvatures
}

/// Thomas algorithm. `sub[0]` and `sup[len - 1]` are ignored.
/// The system must be diagonally dominant, no pivoting is done.
fn solve_tridiagonal(
    sub: &DVector<f64>,
    diag: &DVector<f64>,
    sup: &DVector<f64>,
    rhs: &DVector<f64>,
) -> DVector<f64> {
    let size = diag.len();
    let mut sup_prime = DVector::<f64>::zeros(size);
    let mut rhs_prime = DVector::<f64>::zeros(size);

    sup_prime[0] = sup[0] / diag[0];
    rhs_prime[0] = rhs[0] / diag[0];
    for k in 1..size {
        let denominator = diag[k] - sub[k] * sup_prime[k - 1];
        sup_prime[k] = sup[k] / denominator;
        rhs_prime[k] = (rhs[k] - sub[k] * rhs_prime[k - 1]) / denominator;
    }

    let mut solution = rhs_prime.clone();
    for k in (0..size - 1).rev() {
        solution[k] = rhs_prime[k] - sup_prime[k] * solution[k + 1];
    }
    solution
}
