//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from the closed-form pricer and implied-volatility inversion

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidInput`: A parameter failed instrument validation
/// - `InvalidPrice`: Target price for implied volatility is not finite
/// - `InvalidBracket`: Volatility search interval is empty or non-positive
/// - `NoRootInBracket`: Target price unreachable within the volatility bracket
/// - `SolverFailure`: Root finder exhausted its iterations or hit NaN
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::NoRootInBracket { target: 1000.0, lower: 1e-5, upper: 3.0 };
/// assert!(format!("{}", err).contains("1000"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// A model input failed validation.
    #[error(transparent)]
    InvalidInput(#[from] InstrumentError),

    /// Target price is NaN or infinite.
    #[error("Invalid target price: {price}")]
    InvalidPrice {
        /// The invalid price value
        price: f64,
    },

    /// Volatility bracket is not a finite positive interval.
    #[error("Invalid volatility bracket [{lower}, {upper}]")]
    InvalidBracket {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// The objective does not change sign over the bracket.
    #[error("No implied volatility in [{lower}, {upper}] reproduces price {target}")]
    NoRootInBracket {
        /// Target price
        target: f64,
        /// Lower volatility bound attempted
        lower: f64,
        /// Upper volatility bound attempted
        upper: f64,
    },

    /// The root finder failed for a reason other than a missing bracket.
    #[error("Implied volatility solver failed: {0}")]
    SolverFailure(SolverError),
}

impl AnalyticalError {
    /// Returns `true` for errors caused by invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AnalyticalError::InvalidInput(_)
                | AnalyticalError::InvalidPrice { .. }
                | AnalyticalError::InvalidBracket { .. }
        )
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidInput(inner) => inner.into(),
            AnalyticalError::InvalidPrice { .. } | AnalyticalError::InvalidBracket { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::NoRootInBracket { lower, upper, .. } => {
                PricingError::NoRootInBracket { lower, upper }
            }
            AnalyticalError::SolverFailure(inner) => inner.into(),
        }
    }
}
