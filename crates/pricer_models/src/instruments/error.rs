//! Instrument error types.
//!
//! This module provides structured error handling for option parameter
//! construction and option type parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// Every variant is an invalid-input condition: the value can never reach a
/// pricing formula.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Spot price is non-positive or not finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Strike price is non-positive or not finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Time to expiry is non-positive or not finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Volatility is non-positive or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Risk-free rate is not finite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Dividend yield is negative or not finite.
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield value
        dividend_yield: f64,
    },

    /// Unrecognised option type tag.
    #[error("Invalid option type: '{value}' (expected call or put)")]
    InvalidOptionType {
        /// The unrecognised tag
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
