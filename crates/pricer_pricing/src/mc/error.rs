//! Error types for the Monte Carlo engine.
//!
//! Only configuration can fail: once a pricer is built over a valid
//! configuration, estimation over validated parameters is total.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid path count 0: must be in range [1, 10_000_000]"
        );
    }

    #[test]
    fn test_config_error_is_invalid_input() {
        let err: PricingError = ConfigError::InvalidPathCount(20_000_000).into();
        assert!(matches!(err, PricingError::InvalidInput(msg) if msg.contains("20000000")));
    }
}
