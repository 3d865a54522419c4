//! Monte Carlo pricing engine.
//!
//! Terminal prices are sampled exactly from the risk-neutral lognormal law
//!
//! S_T = S·exp((r - q - σ²/2)T + σ√T·Z),  Z ~ N(0, 1)
//!
//! and the estimate is the discounted sample mean of the payoff. With q = 0
//! this is the plain GBM terminal distribution.

use pricer_models::instruments::{OptionParameters, OptionType};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use crate::rng::PricerRng;

/// Normal variates drawn per batch.
const BATCH_SIZE: usize = 4096;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::McEstimate;
///
/// let estimate = McEstimate { price: 10.5, std_error: 0.05, n_paths: 100_000 };
/// assert!((estimate.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct McEstimate {
    /// Discounted sample mean of the payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    ///
    /// Zero for a single path, where the sample variance is undefined.
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
}

impl McEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Distance from `reference` in units of standard error.
    ///
    /// Returns infinity when the estimate has zero standard error and
    /// differs from the reference.
    pub fn deviation_in_std_errors(&self, reference: f64) -> f64 {
        let diff = (self.price - reference).abs();
        if diff == 0.0 {
            0.0
        } else {
            diff / self.std_error
        }
    }
}

/// Monte Carlo pricing engine.
///
/// Owns its random number generator: successive [`estimate`](Self::estimate)
/// calls continue the same stream, and [`reseed`](Self::reseed) or
/// [`reset`](Self::reset) restart it. Separate pricers never share state.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionParameters, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let mut pricer = MonteCarloPricer::new(MonteCarloConfig::default()).unwrap();
///
/// let first = pricer.estimate(&params, OptionType::Put);
/// pricer.reset();
/// let again = pricer.estimate(&params, OptionType::Put);
/// assert_eq!(first, again);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    /// Reused batch buffer of normal variates.
    normals: Vec<f64>,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a new pricer seeded from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            normals: vec![0.0; config.n_paths().min(BATCH_SIZE)],
            rng: PricerRng::from_seed(config.seed()),
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the seed the generator was last started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the generator from the configured seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.config.seed());
    }

    /// Restarts the generator from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = PricerRng::from_seed(seed);
    }

    /// Estimates the price of a European option.
    ///
    /// Consumes `n_paths` normal variates from the pricer's stream. The
    /// standard error is computed from the unbiased sample variance of the
    /// discounted payoffs.
    pub fn estimate(&mut self, params: &OptionParameters, option_type: OptionType) -> McEstimate {
        let n_paths = self.config.n_paths();
        let expiry = params.expiry();
        let vol = params.volatility();
        let strike = params.strike();

        let log_spot = params.spot().ln();
        let drift = (params.rate() - params.dividend_yield() - 0.5 * vol * vol) * expiry;
        let diffusion = vol * expiry.sqrt();
        let discount = params.discount_factor();

        // Welford accumulation of the undiscounted payoff
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut count = 0usize;

        let mut remaining = n_paths;
        while remaining > 0 {
            let batch = remaining.min(self.normals.len());
            let normals = &mut self.normals[..batch];
            self.rng.fill_normal(normals);

            for &z in normals.iter() {
                let terminal = (log_spot + drift + diffusion * z).exp();
                let payoff = option_type.intrinsic(terminal, strike);

                count += 1;
                let delta = payoff - mean;
                mean += delta / count as f64;
                m2 += delta * (payoff - mean);
            }
            remaining -= batch;
        }

        let std_error = if count > 1 {
            let variance = m2 / (count - 1) as f64;
            discount * (variance / count as f64).sqrt()
        } else {
            0.0
        };

        let estimate = McEstimate {
            price: discount * mean,
            std_error,
            n_paths,
        };

        tracing::debug!(
            option_type = %option_type,
            n_paths,
            seed = self.rng.seed(),
            price = estimate.price,
            std_error = estimate.std_error,
            "Monte Carlo estimate complete"
        );

        estimate
    }
}

/// Estimates a European option price with a freshly seeded pricer.
///
/// Equal inputs always give bit-identical output.
///
/// # Errors
///
/// Returns `ConfigError` if `n_paths` is outside [1, 10_000_000].
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionParameters, OptionType};
/// use pricer_pricing::mc::monte_carlo_price;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let a = monte_carlo_price(&params, OptionType::Call, 20_000, 11).unwrap();
/// let b = monte_carlo_price(&params, OptionType::Call, 20_000, 11).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn monte_carlo_price(
    params: &OptionParameters,
    option_type: OptionType,
    n_paths: usize,
    seed: u64,
) -> Result<McEstimate, ConfigError> {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .seed(seed)
        .build()?;
    let mut pricer = MonteCarloPricer::new(config)?;
    Ok(pricer.estimate(params, option_type))
}
