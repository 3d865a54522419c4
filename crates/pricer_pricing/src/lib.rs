//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! Monte Carlo estimation of European option prices under risk-neutral
//! geometric Brownian motion, used as an independent cross-check of the
//! closed form in `pricer_models`.
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): error taxonomy
//! - Layer 2 (pricer_models): `OptionParameters`, `OptionType`
//!
//! ## Reproducibility
//!
//! Every [`MonteCarloPricer`](mc::MonteCarloPricer) owns its own
//! [`PricerRng`](rng::PricerRng). There is no global generator, so
//! concurrent pricers on separate threads never share state, and a fixed
//! seed always reproduces the same estimate.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{OptionParameters, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(50_000)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//! let estimate = pricer.estimate(&params, OptionType::Call);
//!
//! // Closed form is 10.4506
//! assert!((estimate.price - 10.4506).abs() < 5.0 * estimate.std_error);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;
