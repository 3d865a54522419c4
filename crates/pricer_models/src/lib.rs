//! # Pricer Models (L2: Business Logic)
//!
//! European option instruments and the Black-Scholes-Merton closed form.
//!
//! This crate provides:
//! - Instrument definitions: [`OptionType`](instruments::OptionType) and
//!   validated [`OptionParameters`](instruments::OptionParameters)
//! - The standard normal CDF/PDF
//! - Closed-form prices (with continuous dividend yield) and Greeks
//! - Implied volatility via bracketed root finding over the closed form
//!
//! ## Design Principles
//!
//! - **Validate at construction**: parameters that reach a formula are already
//!   known to be finite and strictly positive where the formula divides by them
//! - **Closed enumerations** for option type, parsed once at the boundary
//! - **Composition over the root finder**: implied volatility is a
//!   [`ScalarObjective`](pricer_core::math::solvers::ScalarObjective) handed to
//!   any [`BracketedRootFinder`](pricer_core::math::solvers::BracketedRootFinder)
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{implied_volatility, BlackScholes};
//! use pricer_models::instruments::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let price = BlackScholes::new(params).price(OptionType::Call);
//! assert!((price - 10.4506).abs() < 1e-4);
//!
//! let vol = implied_volatility(price, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap();
//! assert!((vol - 0.2).abs() < 1e-8);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
