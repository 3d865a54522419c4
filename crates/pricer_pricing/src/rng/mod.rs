//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded generator behind the Monte Carlo
//! estimator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Generators are always seeded; there is no entropy-seeded constructor
//! - **Instance-scoped state**: each pricer owns its generator, never a global one
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Algorithms
//!
//! - Uniform stream: `rand::rngs::StdRng`, which is ChaCha12 in `rand` 0.8,
//!   seeded from a `u64` through `SeedableRng::seed_from_u64` (PCG32 seed expansion)
//! - Normal variates: Ziggurat method via `rand_distr::StandardNormal`
//!
//! `StdRng` is not guaranteed to be stable across `rand` releases, so
//! bit-identical sequences hold for a given seed only within a pinned
//! `rand` version.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::PricerRng;
