//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use pricer_models::analytical::{DEFAULT_VOL_LOWER, DEFAULT_VOL_UPPER};
use pricer_pricing::mc::{DEFAULT_PATHS, DEFAULT_SEED, MAX_PATHS};

/// Log level variable.
pub const ENV_LOG_LEVEL: &str = "BSM_LOG_LEVEL";
/// Monte Carlo path count variable.
pub const ENV_MC_PATHS: &str = "BSM_MC_PATHS";
/// Monte Carlo seed variable.
pub const ENV_MC_SEED: &str = "BSM_MC_SEED";
/// Output format variable.
pub const ENV_OUTPUT_FORMAT: &str = "BSM_OUTPUT_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    #[error("Invalid volatility bracket [{lower}, {upper}]: need 0 < lower < upper")]
    InvalidBracket { lower: f64, upper: f64 },

    #[error("Invalid solver tolerance {0}: must be positive")]
    InvalidTolerance(f64),

    #[error("Invalid solver iteration limit: must be at least 1")]
    InvalidMaxIterations,

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `[monte_carlo]` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSection {
    /// Paths per estimate
    pub n_paths: usize,
    /// Generator seed
    pub seed: u64,
}

impl Default for MonteCarloSection {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
        }
    }
}

/// `[solver]` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Lower volatility bound
    pub lower: f64,
    /// Upper volatility bound
    pub upper: f64,
    /// Absolute tolerance on σ
    pub tolerance: f64,
    /// Iteration limit
    pub max_iterations: usize,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            lower: DEFAULT_VOL_LOWER,
            upper: DEFAULT_VOL_UPPER,
            tolerance: 1e-10,
            max_iterations: 100,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BsmConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Monte Carlo settings
    pub monte_carlo: MonteCarloSection,
    /// Implied volatility solver settings
    pub solver: SolverSection,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl BsmConfig {
    /// Overrides only the fields whose variables are set
    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(paths) = lookup(ENV_MC_PATHS) {
            self.monte_carlo.n_paths = paths
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_MC_PATHS, paths)))?;
        }

        if let Some(seed) = lookup(ENV_MC_SEED) {
            self.monte_carlo.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_MC_SEED, seed)))?;
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: BsmConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n_paths = self.monte_carlo.n_paths;
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(n_paths));
        }

        let SolverSection {
            lower,
            upper,
            tolerance,
            max_iterations,
        } = self.solver;
        if !(lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper) {
            return Err(ConfigError::InvalidBracket { lower, upper });
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations);
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.output_format = format;
        }
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Raise the log level to debug
    pub verbose: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<BsmConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] over an arbitrary variable lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<BsmConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => BsmConfig::from_file(path)?,
        None => BsmConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
