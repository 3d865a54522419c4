//! Monte Carlo estimator for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path count, seed)
//! ├── normal buffer     (reused batch of variates)
//! ├── PricerRng         (instance-owned generator)
//! └── estimate()
//!     ├── exact lognormal terminal sampling
//!     ├── payoff via OptionType::intrinsic
//!     └── Welford mean/variance → McEstimate
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{OptionParameters, OptionType};
//! use pricer_pricing::mc::monte_carlo_price;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let estimate = monte_carlo_price(&params, OptionType::Put, 100_000, 42).unwrap();
//!
//! // Closed form is 5.5735
//! assert!((estimate.price - 5.5735).abs() < 5.0 * estimate.std_error);
//! ```

mod config;
mod error;
mod pricer;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, DEFAULT_SEED, MAX_PATHS,
};
pub use error::ConfigError;
pub use pricer::{monte_carlo_price, McEstimate, MonteCarloPricer};
