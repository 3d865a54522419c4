//! CLI error types

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `bsm` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing request failed
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON rendering failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// One or more self-checks failed
    #[error("{0} self-check(s) failed")]
    CheckFailed(usize),
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<pricer_pricing::mc::ConfigError> for CliError {
    fn from(err: pricer_pricing::mc::ConfigError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
