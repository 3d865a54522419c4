//! Brent's method root-finding solver.

use super::{BracketedRootFinder, ScalarObjective, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// Brent's method intelligently switches between:
/// - **Bisection**: Guaranteed progress, slower convergence
/// - **Secant method**: Faster convergence using linear approximation
/// - **Inverse quadratic interpolation**: Even faster when applicable
///
/// An interpolated step is accepted only if it lands inside the current
/// bracket and shrinks faster than the step before last; otherwise the
/// solver bisects. The bracket `[b, c]` always straddles the root.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BracketedRootFinder, BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver: BrentSolver<f64> = BrentSolver::new(SolverConfig::default());
    /// ```
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

impl<T: Float> Default for BrentSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<T: Float> BracketedRootFinder<T> for BrentSolver<T> {
    /// Find a root of `objective` in the bracket [lower, upper].
    ///
    /// Requires that the objective has opposite signs at the endpoints.
    /// The endpoints may be given in either order.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BracketedRootFinder, BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    ///
    /// // Solve x² - 2 = 0 in bracket [0, 2]
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    fn find_root<O>(&self, objective: O, lower: T, upper: T) -> Result<T, SolverError>
    where
        O: ScalarObjective<T>,
    {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let half = one / two;

        if !lower.is_finite() || !upper.is_finite() {
            return Err(SolverError::NumericalInstability(format!(
                "non-finite bracket [{}, {}]",
                to_f64(lower),
                to_f64(upper)
            )));
        }

        let mut a = lower;
        let mut b = upper;
        let mut fa = objective.evaluate(a);
        let mut fb = objective.evaluate(b);

        if fa.is_nan() || fb.is_nan() {
            return Err(SolverError::NumericalInstability(format!(
                "objective is NaN at bracket endpoint ({} or {})",
                to_f64(a),
                to_f64(b)
            )));
        }

        if fa == zero {
            return Ok(a);
        }
        if fb == zero {
            return Ok(b);
        }

        if (fa > zero) == (fb > zero) {
            return Err(SolverError::NoBracket {
                a: to_f64(a),
                b: to_f64(b),
            });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for _iteration in 0..self.config.max_iterations {
            // Re-establish the bracket [b, c] around the root.
            if (fb > zero) == (fc > zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // b is always the best estimate so far.
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * self.config.tolerance;
            let xm = half * (c - b);

            if xm.abs() <= tol1 || fb == zero {
                return Ok(b);
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q);

                if a == c {
                    // Secant step
                    p = two * xm * s;
                    q = one - s;
                } else {
                    // Inverse quadratic interpolation
                    let qa = fa / fc;
                    let r = fb / fc;
                    p = s * (two * xm * qa * (qa - r) - (b - a) * (r - one));
                    q = (qa - one) * (r - one) * (s - one);
                }

                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let min1 = three * xm * q - (tol1 * q).abs();
                let min2 = (e * q).abs();

                if two * p < min1.min(min2) {
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;

            if d.abs() > tol1 {
                b = b + d;
            } else if xm > zero {
                b = b + tol1;
            } else {
                b = b - tol1;
            }

            fb = objective.evaluate(b);
            if fb.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "objective is NaN at x = {}",
                    to_f64(b)
                )));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
