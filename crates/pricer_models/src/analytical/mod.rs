//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes-Merton closed-form prices with a continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Implied volatility via bracketed root finding
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Validated inputs**: every formula takes an [`OptionParameters`](crate::instruments::OptionParameters),
//!   so σ = 0 or T = 0 is rejected before d₁ is computed
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails
//! - **Composable inversion**: implied volatility is a scalar objective handed
//!   to a generic root finder

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{black_scholes_greeks, black_scholes_price, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use implied_vol::{
    implied_volatility, ImpliedVolatilitySolver, DEFAULT_VOL_LOWER, DEFAULT_VOL_UPPER,
};
