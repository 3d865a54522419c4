//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for Monte Carlo
//! pricing simulations.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Number of paths used when none is specified.
pub const DEFAULT_PATHS: usize = 10_000;

/// Seed used when none is specified.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), 7);
///
/// // Unset fields fall back to the defaults
/// let default = MonteCarloConfig::builder().build().unwrap();
/// assert_eq!(default.n_paths(), 10_000);
/// assert_eq!(default.seed(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Seed for reproducibility.
    seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPathCount` if `n_paths` is 0 or greater
    /// than 10,000,000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is outside [1, 10_000_000].
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .n_paths(250_000)
            .seed(12345)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 250_000);
        assert_eq!(config.seed(), 12345);
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();
        assert_eq!(config, MonteCarloConfig::default());
        assert_eq!(config.n_paths(), DEFAULT_PATHS);
        assert_eq!(config.seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_config_path_count_bounds() {
        assert_eq!(
            MonteCarloConfig::builder().n_paths(0).build(),
            Err(ConfigError::InvalidPathCount(0))
        );
        assert_eq!(
            MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build(),
            Err(ConfigError::InvalidPathCount(MAX_PATHS + 1))
        );
        assert!(MonteCarloConfig::builder().n_paths(1).build().is_ok());
        assert!(MonteCarloConfig::builder().n_paths(MAX_PATHS).build().is_ok());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(MonteCarloConfig::default().validate().is_ok());
    }
}
