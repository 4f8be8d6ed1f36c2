/// Coefficients of the cubic owning one interval `[x_i, x_{i+1})`:
/// `S_i(t) = a + b*t + c*t^2 + d*t^3` with local offset `t = x - x_i`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntervalCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl IntervalCoefficients {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        IntervalCoefficients { a, b, c, d }
    }

    pub fn value(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    pub fn first_derivative(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + t * 3.0 * self.d)
    }

    pub fn second_derivative(&self, t: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * t
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {
        let eps = 1e-6;
        let polynomial = IntervalCoefficients::new(1.0, 2.5, -0.25, 0.5);

        assert_approx_eq!(polynomial.value(2.1), 9.778, eps);
        assert_approx_eq!(polynomial.value(-3.14), -24.794472, eps);
        assert_approx_eq!(polynomial.value(0.0), 1.0, eps);
    }

    #[test]
    fn derivatives() {
        let eps = 1e-6;
        let polynomial = IntervalCoefficients::new(1.0, 2.5, -0.25, 0.5);

        assert_approx_eq!(polynomial.first_derivative(0.0), 2.5, eps);
        assert_approx_eq!(polynomial.first_derivative(2.0), 7.5, eps);
        assert_approx_eq!(polynomial.second_derivative(0.0), -0.5, eps);
        assert_approx_eq!(polynomial.second_derivative(2.0), 5.5, eps);
    }
}
