//! bsm - Command Line Pricing for European Options
//!
//! This is the operational entry point for the Black-Scholes-Merton pricing
//! library.
//!
//! # Commands
//!
//! - `bsm price` - Closed-form price with optional dividend yield
//! - `bsm greeks` - Delta, gamma, vega, theta and rho
//! - `bsm simulate` - Seeded Monte Carlo estimate against the closed form
//! - `bsm implied-vol` - Volatility implied by an observed price
//! - `bsm check` - Effective configuration and library self-checks
//!
//! # Configuration
//!
//! Settings are layered: defaults, then `--config <file>` (TOML), then
//! `BSM_*` environment variables, then command-line flags. Logs go to
//! stderr so JSON on stdout stays machine-readable.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the pricer crates to a
//! command-line interface and holds no pricing logic of its own.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::greeks::GreeksArgs;
use commands::implied_vol::ImpliedVolArgs;
use commands::price::PriceArgs;
use commands::simulate::SimulateArgs;
use config::{build_config, BsmConfig, CliArgs, OutputFormat};

/// Black-Scholes-Merton pricing CLI
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option in closed form
    Price(PriceArgs),

    /// Compute Greeks for a European option
    Greeks(GreeksArgs),

    /// Estimate the price by Monte Carlo simulation
    Simulate(SimulateArgs),

    /// Solve for the volatility implied by a price
    ImpliedVol(ImpliedVolArgs),

    /// Check configuration and run self-checks
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            format: self.format,
        }
    }
}

fn init_tracing(config: &BsmConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli.config_args())?;
    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::Greeks(args) => commands::greeks::run(args, &config),
        Commands::Simulate(args) => commands::simulate::run(args, &config),
        Commands::ImpliedVol(args) => commands::implied_vol::run(args, &config),
        Commands::Check => commands::check::run(&config),
    }
}
