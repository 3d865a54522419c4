//! Implied volatility by bracketed inversion of the closed-form price.
//!
//! The solver composes two independent pieces: a [`ScalarObjective`] that
//! measures the pricing error at a trial volatility, and any
//! [`BracketedRootFinder`] that locates its sign change. Brent's method is
//! the default finder.

use pricer_core::math::solvers::{
    BracketedRootFinder, BrentSolver, ScalarObjective, SolverConfig,
};
use pricer_core::types::SolverError;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::{OptionParameters, OptionType};

/// Default lower volatility bound.
pub const DEFAULT_VOL_LOWER: f64 = 1e-5;

/// Default upper volatility bound.
pub const DEFAULT_VOL_UPPER: f64 = 3.0;

/// Pricing error `BS(σ) - target` for fixed market inputs.
struct PriceObjective {
    params: OptionParameters,
    option_type: OptionType,
    target: f64,
}

impl ScalarObjective<f64> for PriceObjective {
    fn evaluate(&self, volatility: f64) -> f64 {
        match self.params.with_volatility(volatility) {
            Ok(params) => BlackScholes::new(params).price(self.option_type) - self.target,
            // Surfaces as NumericalInstability from the root finder
            Err(_) => f64::NAN,
        }
    }
}

/// Implied volatility solver.
///
/// Searches `[lower, upper]` (default `[1e-5, 3.0]`) for the σ that
/// reproduces a target price. The root finder is a type parameter so the
/// inversion is not tied to a specific algorithm.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, ImpliedVolatilitySolver};
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.25).unwrap();
/// let target = BlackScholes::new(params).price(OptionType::Call);
///
/// let solver = ImpliedVolatilitySolver::new();
/// let vol = solver
///     .solve(target, 100.0, 100.0, 1.0, 0.05, OptionType::Call)
///     .unwrap();
/// assert!((vol - 0.25).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolatilitySolver<R = BrentSolver<f64>> {
    root_finder: R,
    lower: f64,
    upper: f64,
}

impl ImpliedVolatilitySolver {
    /// Creates a Brent-based solver with default tolerance and bracket.
    pub fn new() -> Self {
        Self::with_root_finder(BrentSolver::with_defaults())
    }

    /// Creates a Brent-based solver with the given configuration.
    pub fn with_config(config: SolverConfig<f64>) -> Self {
        Self::with_root_finder(BrentSolver::new(config))
    }
}

impl Default for ImpliedVolatilitySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BracketedRootFinder<f64>> ImpliedVolatilitySolver<R> {
    /// Creates a solver over an arbitrary bracketed root finder.
    pub fn with_root_finder(root_finder: R) -> Self {
        Self {
            root_finder,
            lower: DEFAULT_VOL_LOWER,
            upper: DEFAULT_VOL_UPPER,
        }
    }

    /// Replaces the volatility search interval.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidBracket` unless `0 < lower < upper` and both
    /// bounds are finite.
    pub fn with_bracket(self, lower: f64, upper: f64) -> Result<Self, AnalyticalError> {
        let valid = lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper;
        if !valid {
            return Err(AnalyticalError::InvalidBracket { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            ..self
        })
    }

    /// Returns the volatility search interval as `(lower, upper)`.
    pub fn bracket(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Finds the volatility that reproduces `target_price` (no dividend).
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidPrice` if the target is not finite
    /// - `AnalyticalError::InvalidInput` if S, K, T or r fail validation
    /// - `AnalyticalError::NoRootInBracket` if no σ in the bracket reaches the target
    /// - `AnalyticalError::SolverFailure` if the root finder does not converge
    pub fn solve(
        &self,
        target_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        // Volatility is replaced on every evaluation; the upper bound is
        // just a valid seed.
        let params = OptionParameters::new(spot, strike, expiry, rate, self.upper)?;
        self.solve_for(target_price, params, option_type)
    }

    /// Finds the volatility that reproduces `target_price` for a full
    /// parameter set, keeping its dividend yield. The volatility carried by
    /// `params` is ignored.
    ///
    /// # Errors
    /// As for [`solve`](Self::solve).
    pub fn solve_for(
        &self,
        target_price: f64,
        params: OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        if !target_price.is_finite() {
            return Err(AnalyticalError::InvalidPrice {
                price: target_price,
            });
        }

        let objective = PriceObjective {
            params,
            option_type,
            target: target_price,
        };

        match self.root_finder.find_root(objective, self.lower, self.upper) {
            Ok(volatility) => {
                tracing::debug!(
                    target_price,
                    option_type = %option_type,
                    volatility,
                    "Implied volatility solved"
                );
                Ok(volatility)
            }
            Err(SolverError::NoBracket { .. }) => {
                tracing::warn!(
                    target_price,
                    option_type = %option_type,
                    lower = self.lower,
                    upper = self.upper,
                    "Target price unreachable within volatility bracket"
                );
                Err(AnalyticalError::NoRootInBracket {
                    target: target_price,
                    lower: self.lower,
                    upper: self.upper,
                })
            }
            Err(err) => Err(AnalyticalError::SolverFailure(err)),
        }
    }
}

/// Implied volatility with the default Brent solver and bracket.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{implied_volatility, AnalyticalError};
/// use pricer_models::instruments::OptionType;
///
/// let vol = implied_volatility(10.4506, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap();
/// assert!((vol - 0.2).abs() < 1e-4);
///
/// let err = implied_volatility(1000.0, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap_err();
/// assert!(matches!(err, AnalyticalError::NoRootInBracket { .. }));
/// ```
pub fn implied_volatility(
    target_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    ImpliedVolatilitySolver::new().solve(target_price, spot, strike, expiry, rate, option_type)
}
