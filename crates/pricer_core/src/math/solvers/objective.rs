//! Abstractions over scalar objectives and bracketed root finders.

use crate::types::SolverError;

/// A real-valued function of one real variable.
///
/// Closures `Fn(T) -> T` implement this trait automatically, so ad-hoc
/// objectives need no wrapper type. Named implementations are useful when
/// the objective carries state (e.g. a target price and fixed model inputs).
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::ScalarObjective;
///
/// let square = |x: f64| x * x;
/// assert_eq!(square.evaluate(3.0), 9.0);
/// ```
pub trait ScalarObjective<T> {
    /// Evaluates the objective at `x`.
    fn evaluate(&self, x: T) -> T;
}

impl<T, F> ScalarObjective<T> for F
where
    F: Fn(T) -> T,
{
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self(x)
    }
}

/// A derivative-free root finder that requires a sign change over a bracket.
///
/// Implementations must terminate within a bounded number of objective
/// evaluations and must never report a bracket endpoint as a root unless
/// the objective actually vanishes (to tolerance) there.
pub trait BracketedRootFinder<T> {
    /// Finds `x` in `[lower, upper]` with `objective(x) ≈ 0`.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - objective has the same sign at both endpoints
    /// * `SolverError::MaxIterationsExceeded` - no convergence within the iteration budget
    /// * `SolverError::NumericalInstability` - the objective produced NaN
    fn find_root<O>(&self, objective: O, lower: T, upper: T) -> Result<T, SolverError>
    where
        O: ScalarObjective<T>;
}
