//! Validated Black-Scholes-Merton inputs.
//!
//! This module provides the parameter set consumed by every pricer in the
//! workspace, with validation that rules out the inputs for which d₁ is
//! undefined.

use super::error::InstrumentError;

/// Market and contract inputs for a European option.
///
/// S, K, T and σ are strictly positive and finite, r is finite and
/// q is non-negative and finite. σ and T enter the formulas only through
/// σ²T and σ√T, so a zero for either would divide by zero in d₁.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 105.0, 0.5, 0.03, 0.25)
///     .unwrap()
///     .with_dividend_yield(0.01)
///     .unwrap();
/// assert_eq!(params.strike(), 105.0);
/// assert_eq!(params.dividend_yield(), 0.01);
///
/// // Zero volatility is rejected
/// assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
}

impl OptionParameters {
    /// Creates a dividend-free parameter set.
    ///
    /// # Arguments
    /// * `spot` - Underlying price S (must be positive)
    /// * `strike` - Strike K (must be positive)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `volatility` - Annualised volatility σ (must be positive)
    ///
    /// # Errors
    /// The first failing check, in argument order.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, InstrumentError> {
        if !is_positive(spot) {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !is_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        if !rate.is_finite() {
            return Err(InstrumentError::InvalidRate { rate });
        }
        if !is_positive(volatility) {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield: 0.0,
        })
    }

    /// Returns a copy carrying a continuous dividend yield q.
    ///
    /// # Errors
    /// `InstrumentError::InvalidDividendYield` if q is negative or not finite.
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Result<Self, InstrumentError> {
        if !(dividend_yield.is_finite() && dividend_yield >= 0.0) {
            return Err(InstrumentError::InvalidDividendYield { dividend_yield });
        }
        Ok(Self {
            dividend_yield,
            ..self
        })
    }

    /// Returns a copy with a different volatility.
    ///
    /// # Errors
    /// `InstrumentError::InvalidVolatility` if σ is non-positive or not finite.
    pub fn with_volatility(self, volatility: f64) -> Result<Self, InstrumentError> {
        if !is_positive(volatility) {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }
        Ok(Self { volatility, ..self })
    }

    /// Returns the spot price S.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry T in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuous dividend yield q (zero unless set).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor e^(-qT).
    #[inline]
    pub fn dividend_discount_factor(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }
}

#[inline]
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_params() {
        let params = OptionParameters::new(100.0, 95.0, 0.5, 0.02, 0.3).unwrap();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 95.0);
        assert_eq!(params.expiry(), 0.5);
        assert_eq!(params.rate(), 0.02);
        assert_eq!(params.volatility(), 0.3);
        assert_eq!(params.dividend_yield(), 0.0);
    }

    #[test]
    fn test_negative_rate_allowed() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(matches!(
            OptionParameters::new(0.0, 100.0, 1.0, 0.05, 0.2),
            Err(InstrumentError::InvalidSpot { .. })
        ));
        assert!(matches!(
            OptionParameters::new(100.0, -1.0, 1.0, 0.05, 0.2),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(matches!(
            OptionParameters::new(f64::NAN, 100.0, 1.0, 0.05, 0.2),
            Err(InstrumentError::InvalidSpot { .. })
        ));
        assert!(matches!(
            OptionParameters::new(100.0, 100.0, f64::INFINITY, 0.05, 0.2),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2),
            Err(InstrumentError::InvalidRate { .. })
        ));
        assert!(matches!(
            OptionParameters::new(100.0, 100.0, 1.0, 0.05, f64::NAN),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_dividend_yield() {
        let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();

        let with_q = base.with_dividend_yield(0.03).unwrap();
        assert_eq!(with_q.dividend_yield(), 0.03);
        assert_eq!(with_q.spot(), base.spot());

        assert!(base.with_dividend_yield(0.0).is_ok());
        assert!(matches!(
            base.with_dividend_yield(-0.01),
            Err(InstrumentError::InvalidDividendYield { .. })
        ));
        assert!(base.with_dividend_yield(f64::INFINITY).is_err());
    }

    #[test]
    fn test_with_volatility() {
        let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
            .unwrap()
            .with_dividend_yield(0.02)
            .unwrap();

        let bumped = base.with_volatility(0.35).unwrap();
        assert_eq!(bumped.volatility(), 0.35);
        assert_eq!(bumped.dividend_yield(), 0.02);

        assert!(base.with_volatility(-0.1).is_err());
    }

    #[test]
    fn test_discount_factors() {
        let params = OptionParameters::new(100.0, 100.0, 2.0, 0.05, 0.2)
            .unwrap()
            .with_dividend_yield(0.01)
            .unwrap();
        assert!((params.discount_factor() - (-0.1_f64).exp()).abs() < 1e-15);
        assert!((params.dividend_discount_factor() - (-0.02_f64).exp()).abs() < 1e-15);
    }
}
