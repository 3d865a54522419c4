//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Caller-facing taxonomy for every pricing operation
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// The coarse taxonomy surfaced to callers of the pricing library. Layer 2
/// errors (e.g. `AnalyticalError`) convert into this type so service code can
/// match on a small, stable set of failure modes.
///
/// # Variants
/// - `InvalidInput`: Non-positive spot, strike, expiry or volatility, or an unknown option type
/// - `NoRootInBracket`: An inversion objective does not change sign over its search interval
/// - `NumericalInstability`: Computation failed to converge or produced non-finite values
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
///
/// let err = PricingError::NoRootInBracket { lower: 1e-5, upper: 3.0 };
/// assert!(format!("{}", err).contains("[0.00001, 3]"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No sign change of the objective over the attempted bracket.
    #[error("No root in bracket [{lower}, {upper}]")]
    NoRootInBracket {
        /// Lower end of the attempted bracket
        lower: f64,
        /// Upper end of the attempted bracket
        upper: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// The objective returned NaN or the bracket was not finite.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NoBracket { a, b } => PricingError::NoRootInBracket {
                lower: a.min(b),
                upper: a.max(b),
            },
            other => PricingError::NumericalInstability(other.to_string()),
        }
    }
}
