//! Numerical building blocks shared by the pricing layers.
//!
//! - [`solvers`]: Scalar objective trait and bracketed root finders

pub mod solvers;
