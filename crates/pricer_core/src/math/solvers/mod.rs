//! Root-finding solvers for numerical inversion.
//!
//! This module separates *what* is being inverted from *how* the root is
//! found:
//!
//! - [`ScalarObjective`]: any real-to-real function, blanket-implemented for closures
//! - [`BracketedRootFinder`]: a routine that locates a sign change inside `[lower, upper]`
//! - [`BrentSolver`]: Brent's method (bisection + secant + inverse quadratic interpolation)
//!
//! Implied volatility is one such inversion; the same finder serves any
//! other monotone model inversion without knowing about option pricing.
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Absolute tolerance on the root location (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BracketedRootFinder, BrentSolver, ScalarObjective, SolverConfig};
//!
//! // A named objective: find x with e^x = 2
//! struct ExpTarget(f64);
//!
//! impl ScalarObjective<f64> for ExpTarget {
//!     fn evaluate(&self, x: f64) -> f64 {
//!         x.exp() - self.0
//!     }
//! }
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//! let root = solver.find_root(ExpTarget(2.0), 0.0, 1.0).unwrap();
//! assert!((root - 2.0_f64.ln()).abs() < 1e-10);
//! ```

mod brent;
mod config;
mod objective;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use objective::{BracketedRootFinder, ScalarObjective};
