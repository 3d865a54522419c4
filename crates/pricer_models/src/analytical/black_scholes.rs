//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides closed-form prices with a continuous dividend yield
//! and the five analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Greeks and dividends
//!
//! Greeks are always evaluated in the dividend-free model (q = 0), even when
//! the parameter set carries a yield. Only the price is dividend-adjusted.
//!
//! ## Numerical range
//!
//! Inputs are validated to be finite and strictly positive, so the formulas
//! never divide by zero. Results stop being reliable when σ√T is tiny
//! relative to |ln(S/K)| (d₁ saturates and the price collapses onto the
//! discounted intrinsic value), or when rT or qT exceed roughly 700, where
//! the discount factors underflow to zero or overflow to infinity. Such values
//! propagate as IEEE special values rather than errors.

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{OptionParameters, OptionType};

/// Days per year used to express theta per calendar day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Scale converting a per-unit sensitivity into a per-percentage-point one.
const PERCENT: f64 = 100.0;

/// Option sensitivities in the reporting convention.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ per 1 percentage point of volatility
/// - `theta`: ∂V/∂t per calendar day
/// - `rho`: ∂V/∂r per 1 percentage point of rate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    /// Delta
    pub delta: f64,
    /// Gamma
    pub gamma: f64,
    /// Vega (per 1% volatility)
    pub vega: f64,
    /// Theta (per day)
    pub theta: f64,
    /// Rho (per 1% rate)
    pub rho: f64,
}

/// Black-Scholes-Merton model for European option pricing.
///
/// Holds one validated parameter set; every method is a pure function of it.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let bs = BlackScholes::new(params);
///
/// let call_price = bs.price(OptionType::Call);
/// let put_price = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: OptionParameters,
}

impl BlackScholes {
    /// Creates a model over a validated parameter set.
    pub fn new(params: OptionParameters) -> Self {
        Self { params }
    }

    /// Returns the parameter set.
    #[inline]
    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    /// Computes the dividend-adjusted d₁ term.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1_with_yield(self.params.dividend_yield())
    }

    /// Computes the dividend-adjusted d₂ term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.vol_sqrt_t()
    }

    #[inline]
    fn vol_sqrt_t(&self) -> f64 {
        self.params.volatility() * self.params.expiry().sqrt()
    }

    fn d1_with_yield(&self, dividend_yield: f64) -> f64 {
        let p = &self.params;
        let sigma = p.volatility();
        ((p.spot() / p.strike()).ln() + (p.rate() - dividend_yield + 0.5 * sigma * sigma) * p.expiry())
            / self.vol_sqrt_t()
    }

    /// Computes the option price.
    ///
    /// Reduces to the dividend-free formula when q = 0.
    pub fn price(&self, option_type: OptionType) -> f64 {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = d1 - self.vol_sqrt_t();
        let forward_spot = p.spot() * p.dividend_discount_factor();
        let discounted_strike = p.strike() * p.discount_factor();

        match option_type {
            OptionType::Call => forward_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - forward_spot * norm_cdf(-d1),
        }
    }

    /// Computes the European call price.
    #[inline]
    pub fn price_call(&self) -> f64 {
        self.price(OptionType::Call)
    }

    /// Computes the European put price.
    #[inline]
    pub fn price_put(&self) -> f64 {
        self.price(OptionType::Put)
    }

    /// Computes raw Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> f64 {
        let n_d1 = norm_cdf(self.greek_d1());
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        }
    }

    /// Computes raw Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.greek_d1()) / (self.params.spot() * self.vol_sqrt_t())
    }

    /// Computes raw Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        let p = &self.params;
        p.spot() * p.expiry().sqrt() * norm_pdf(self.greek_d1())
    }

    /// Computes raw annualised Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self, option_type: OptionType) -> f64 {
        let p = &self.params;
        let d1 = self.greek_d1();
        let d2 = d1 - self.vol_sqrt_t();
        let decay = -(p.spot() * p.volatility() * norm_pdf(d1)) / (2.0 * p.expiry().sqrt());
        let carry = p.rate() * p.strike() * p.discount_factor();

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Computes raw Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, option_type: OptionType) -> f64 {
        let p = &self.params;
        let d2 = self.greek_d1() - self.vol_sqrt_t();
        let k_t_df = p.strike() * p.expiry() * p.discount_factor();

        match option_type {
            OptionType::Call => k_t_df * norm_cdf(d2),
            OptionType::Put => -k_t_df * norm_cdf(-d2),
        }
    }

    /// Computes all five Greeks in the reporting convention.
    ///
    /// Vega and rho are divided by 100, theta by 365. Any dividend yield on
    /// the parameter set is ignored.
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        let q = self.params.dividend_yield();
        if q != 0.0 {
            tracing::debug!(dividend_yield = q, "Greeks evaluated without dividend yield");
        }

        Greeks {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            vega: self.vega() / PERCENT,
            theta: self.theta(option_type) / DAYS_PER_YEAR,
            rho: self.rho(option_type) / PERCENT,
        }
    }

    #[inline]
    fn greek_d1(&self) -> f64 {
        self.d1_with_yield(0.0)
    }
}

/// Prices a European option from raw inputs.
///
/// # Errors
/// `AnalyticalError::InvalidInput` if any input fails validation, including
/// σ = 0 or T = 0.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_price;
/// use pricer_models::instruments::OptionType;
///
/// let call = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0, OptionType::Call).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
///
/// assert!(black_scholes_price(100.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionType::Call).is_err());
/// ```
pub fn black_scholes_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    let params = OptionParameters::new(spot, strike, expiry, rate, volatility)?
        .with_dividend_yield(dividend_yield)?;
    Ok(BlackScholes::new(params).price(option_type))
}

/// Computes reporting-convention Greeks from raw inputs (dividend-free model).
///
/// # Errors
/// `AnalyticalError::InvalidInput` if any input fails validation.
pub fn black_scholes_greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<Greeks, AnalyticalError> {
    let params = OptionParameters::new(spot, strike, expiry, rate, volatility)?;
    Ok(BlackScholes::new(params).greeks(option_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::InstrumentError;
    use approx::assert_relative_eq;

    fn model(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> BlackScholes {
        BlackScholes::new(OptionParameters::new(spot, strike, expiry, rate, vol).unwrap())
    }

    fn model_with_yield(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        q: f64,
    ) -> BlackScholes {
        BlackScholes::new(
            OptionParameters::new(spot, strike, expiry, rate, vol)
                .unwrap()
                .with_dividend_yield(q)
                .unwrap(),
        )
    }

    fn atm() -> BlackScholes {
        model(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // d1 = (0 + (0.05 + 0.02) * 1) / 0.2 = 0.35
        assert_relative_eq!(atm().d1(), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = model(110.0, 95.0, 0.75, 0.03, 0.3);
        assert_relative_eq!(bs.d1() - bs.d2(), 0.3 * 0.75_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_d1_includes_dividend_yield() {
        // d1 = (0.05 - 0.03 + 0.02) / 0.2 = 0.2
        let bs = model_with_yield(100.0, 100.0, 1.0, 0.05, 0.2, 0.03);
        assert_relative_eq!(bs.d1(), 0.2, epsilon = 1e-12);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        assert_relative_eq!(atm().price_call(), 10.4506, epsilon = 1e-4);
    }

    #[test]
    fn test_put_price_reference_value() {
        assert_relative_eq!(atm().price_put(), 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_price_matches_convenience_wrappers() {
        let bs = model(95.0, 100.0, 0.5, 0.02, 0.25);
        assert_eq!(bs.price(OptionType::Call), bs.price_call());
        assert_eq!(bs.price(OptionType::Put), bs.price_put());
    }

    #[test]
    fn test_zero_yield_matches_dividend_free() {
        let plain = model(105.0, 100.0, 2.0, 0.04, 0.3);
        let zero_q = model_with_yield(105.0, 100.0, 2.0, 0.04, 0.3, 0.0);
        assert_eq!(plain.price_call(), zero_q.price_call());
        assert_eq!(plain.price_put(), zero_q.price_put());
    }

    #[test]
    fn test_dividend_lowers_call_raises_put() {
        let plain = atm();
        let with_q = model_with_yield(100.0, 100.0, 1.0, 0.05, 0.2, 0.03);
        assert!(with_q.price_call() < plain.price_call());
        assert!(with_q.price_put() > plain.price_put());
    }

    #[test]
    fn test_deep_itm_call() {
        let bs = model(300.0, 100.0, 1.0, 0.05, 0.2);
        let intrinsic = 300.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call(), intrinsic, epsilon = 1e-5);
    }

    #[test]
    fn test_deep_otm_call() {
        let bs = model(30.0, 100.0, 1.0, 0.05, 0.2);
        assert!(bs.price_call() >= 0.0);
        assert!(bs.price_call() < 1e-4);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [60.0, 80.0, 100.0, 120.0, 150.0] {
            let bs = model(100.0, strike, 1.0, 0.05, 0.2);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_with_dividend() {
        for q in [0.01, 0.03, 0.08] {
            let bs = model_with_yield(100.0, 95.0, 2.0, 0.05, 0.3, q);
            let forward = 100.0 * (-q * 2.0_f64).exp() - 95.0 * (-0.1_f64).exp();
            assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = model(100.0, 100.0, 1.0, -0.01, 0.2);
        let forward = 100.0 - 100.0 * 0.01_f64.exp();
        assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Monotonicity and Boundary Tests
    // ==========================================================

    #[test]
    fn test_call_increasing_in_spot_put_decreasing() {
        let spots: Vec<f64> = (60..=140).step_by(5).map(|s| s as f64).collect();
        for pair in spots.windows(2) {
            let lo = model(pair[0], 100.0, 1.0, 0.05, 0.2);
            let hi = model(pair[1], 100.0, 1.0, 0.05, 0.2);
            assert!(hi.price_call() > lo.price_call());
            assert!(hi.price_put() < lo.price_put());
        }
    }

    #[test]
    fn test_call_increasing_in_volatility() {
        let vols = [0.05, 0.1, 0.2, 0.4, 0.8, 1.5];
        for pair in vols.windows(2) {
            let lo = model(100.0, 110.0, 1.0, 0.05, pair[0]);
            let hi = model(100.0, 110.0, 1.0, 0.05, pair[1]);
            assert!(hi.price_call() > lo.price_call());
        }
    }

    #[test]
    fn test_short_expiry_converges_to_intrinsic() {
        let expiry = 1e-8;
        let itm = model(110.0, 100.0, expiry, 0.05, 0.2);
        assert_relative_eq!(itm.price_call(), 10.0, epsilon = 1e-6);
        assert!(itm.price_put().abs() < 1e-6);

        let otm = model(90.0, 100.0, expiry, 0.05, 0.2);
        assert!(otm.price_call().abs() < 1e-6);
        assert_relative_eq!(otm.price_put(), 10.0, epsilon = 1e-6);

        // ATM time value ~ S·σ·sqrt(T/2π)
        let at = model(100.0, 100.0, expiry, 0.05, 0.2);
        assert!(at.price_call() < 1e-3);
        assert!(at.price_put() < 1e-3);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_call_greeks_reference_values() {
        let greeks = atm().greeks(OptionType::Call);
        assert_relative_eq!(greeks.delta, 0.6368, epsilon = 1e-4);
        assert_relative_eq!(greeks.gamma, 0.0188, epsilon = 1e-4);
        assert_relative_eq!(greeks.vega, 0.3752, epsilon = 1e-4);
        assert_relative_eq!(greeks.theta, -0.0176, epsilon = 1e-4);
        assert_relative_eq!(greeks.rho, 0.5323, epsilon = 1e-4);
    }

    #[test]
    fn test_put_greeks_relationships() {
        let bs = atm();
        let call = bs.greeks(OptionType::Call);
        let put = bs.greeks(OptionType::Put);

        assert_relative_eq!(call.delta - put.delta, 1.0, epsilon = 1e-12);
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert!(put.rho < 0.0);
        // Theta difference is r·K·e^(-rT) per year
        let carry = 0.05 * 100.0 * (-0.05_f64).exp() / 365.0;
        assert_relative_eq!(put.theta - call.theta, carry, epsilon = 1e-12);
    }

    #[test]
    fn test_greeks_scaling_matches_raw() {
        let bs = model(105.0, 100.0, 0.5, 0.03, 0.25);
        let greeks = bs.greeks(OptionType::Put);
        assert_eq!(greeks.delta, bs.delta(OptionType::Put));
        assert_eq!(greeks.gamma, bs.gamma());
        assert_relative_eq!(greeks.vega * 100.0, bs.vega(), epsilon = 1e-12);
        assert_relative_eq!(greeks.theta * 365.0, bs.theta(OptionType::Put), epsilon = 1e-12);
        assert_relative_eq!(greeks.rho * 100.0, bs.rho(OptionType::Put), epsilon = 1e-12);
    }

    #[test]
    fn test_greeks_ignore_dividend_yield() {
        let plain = atm().greeks(OptionType::Call);
        let with_q = model_with_yield(100.0, 100.0, 1.0, 0.05, 0.2, 0.04).greeks(OptionType::Call);
        assert_eq!(plain, with_q);
    }

    #[test]
    fn test_delta_bounds() {
        for spot in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let bs = model(spot, 100.0, 1.0, 0.05, 0.2);
            let call_delta = bs.delta(OptionType::Call);
            let put_delta = bs.delta(OptionType::Put);
            assert!((0.0..=1.0).contains(&call_delta));
            assert!((-1.0..=0.0).contains(&put_delta));
        }
    }

    #[test]
    fn test_gamma_peaks_near_atm() {
        let atm_gamma = model(100.0, 100.0, 1.0, 0.05, 0.2).gamma();
        assert!(atm_gamma > model(70.0, 100.0, 1.0, 0.05, 0.2).gamma());
        assert!(atm_gamma > model(140.0, 100.0, 1.0, 0.05, 0.2).gamma());
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let up = model(100.0 + h, 100.0, 1.0, 0.05, 0.2).price_call();
        let dn = model(100.0 - h, 100.0, 1.0, 0.05, 0.2).price_call();
        assert_relative_eq!(atm().delta(OptionType::Call), (up - dn) / (2.0 * h), epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 0.01;
        let up = model(100.0 + h, 100.0, 1.0, 0.05, 0.2).price_call();
        let mid = atm().price_call();
        let dn = model(100.0 - h, 100.0, 1.0, 0.05, 0.2).price_call();
        assert_relative_eq!(atm().gamma(), (up - 2.0 * mid + dn) / (h * h), epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 0.001;
        let up = model(100.0, 100.0, 1.0, 0.05, 0.2 + h).price_call();
        let dn = model(100.0, 100.0, 1.0, 0.05, 0.2 - h).price_call();
        assert_relative_eq!(atm().vega(), (up - dn) / (2.0 * h), epsilon = 1e-3);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta is -∂V/∂T
        let h = 1e-4;
        let longer = model(100.0, 100.0, 1.0 + h, 0.05, 0.2).price_put();
        let shorter = model(100.0, 100.0, 1.0 - h, 0.05, 0.2).price_put();
        let fd_theta = -(longer - shorter) / (2.0 * h);
        assert_relative_eq!(atm().theta(OptionType::Put), fd_theta, epsilon = 1e-4);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 0.0001;
        let up = model(100.0, 100.0, 1.0, 0.05 + h, 0.2).price_call();
        let dn = model(100.0, 100.0, 1.0, 0.05 - h, 0.2).price_call();
        assert_relative_eq!(atm().rho(OptionType::Call), (up - dn) / (2.0 * h), epsilon = 1e-3);
    }

    // ==========================================================
    // Facade Tests
    // ==========================================================

    #[test]
    fn test_facade_price_matches_model() {
        let price =
            black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, 0.02, OptionType::Put).unwrap();
        let direct = model_with_yield(100.0, 100.0, 1.0, 0.05, 0.2, 0.02).price_put();
        assert_eq!(price, direct);
    }

    #[test]
    fn test_facade_rejects_zero_volatility_and_expiry() {
        assert!(matches!(
            black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.0, 0.0, OptionType::Call),
            Err(AnalyticalError::InvalidInput(InstrumentError::InvalidVolatility { .. }))
        ));
        assert!(matches!(
            black_scholes_price(100.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionType::Call),
            Err(AnalyticalError::InvalidInput(InstrumentError::InvalidExpiry { .. }))
        ));
        assert!(black_scholes_greeks(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put).is_err());
        assert!(black_scholes_greeks(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Put).is_err());
    }

    #[test]
    fn test_facade_rejects_negative_dividend() {
        assert!(matches!(
            black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, -0.01, OptionType::Call),
            Err(AnalyticalError::InvalidInput(
                InstrumentError::InvalidDividendYield { .. }
            ))
        ));
    }

    #[test]
    fn test_facade_greeks_reference() {
        let greeks = black_scholes_greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
        assert_relative_eq!(greeks.delta, 0.6368, epsilon = 1e-4);
    }
}
