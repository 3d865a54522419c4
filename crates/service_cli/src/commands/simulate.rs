//! Simulate command implementation
//!
//! Seeded Monte Carlo estimate reported alongside the closed form.

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{OptionParameters, OptionType};
use pricer_pricing::mc::{McEstimate, MonteCarloConfig, MonteCarloPricer};

use super::{render, MarketArgs};
use crate::config::{BsmConfig, MonteCarloSection};
use crate::Result;

/// Arguments for `bsm simulate`
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Annualised volatility
    #[arg(long)]
    pub vol: f64,

    /// Continuous dividend yield
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dividend: f64,

    /// Number of paths (overrides configuration)
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Generator seed (overrides configuration)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Monte Carlo estimate against the closed form
#[derive(Debug, Clone, Serialize)]
pub struct SimulateReport {
    pub option_type: OptionType,
    #[serde(flatten)]
    pub inputs: OptionParameters,
    pub seed: u64,
    pub estimate: McEstimate,
    pub closed_form: f64,
    pub deviation_in_std_errors: f64,
}

/// Run the estimator for `args`, falling back to `defaults` for paths and seed
pub fn compute(args: &SimulateArgs, defaults: &MonteCarloSection) -> Result<SimulateReport> {
    let inputs = args
        .market
        .parameters(args.vol)?
        .with_dividend_yield(args.dividend)?;
    let option_type = args.market.option_type;

    let mc_config = MonteCarloConfig::builder()
        .n_paths(args.paths.unwrap_or(defaults.n_paths))
        .seed(args.seed.unwrap_or(defaults.seed))
        .build()?;
    let mut pricer = MonteCarloPricer::new(mc_config)?;

    let estimate = pricer.estimate(&inputs, option_type);
    let closed_form = BlackScholes::new(inputs).price(option_type);

    Ok(SimulateReport {
        option_type,
        inputs,
        seed: mc_config.seed(),
        estimate,
        closed_form,
        deviation_in_std_errors: estimate.deviation_in_std_errors(closed_form),
    })
}

impl SimulateReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Paths", self.estimate.n_paths.to_string()),
            ("Seed", self.seed.to_string()),
            ("MC price", format!("{:.6}", self.estimate.price)),
            ("Std error", format!("{:.6}", self.estimate.std_error)),
            ("95% CI ±", format!("{:.6}", self.estimate.confidence_95())),
            ("Closed form", format!("{:.6}", self.closed_form)),
            ("Deviation (SE)", format!("{:.3}", self.deviation_in_std_errors)),
        ]
    }
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, config: &BsmConfig) -> Result<()> {
    let report = compute(args, &config.monte_carlo)?;
    info!(
        n_paths = report.estimate.n_paths,
        seed = report.seed,
        deviation = report.deviation_in_std_errors,
        "Monte Carlo estimate complete"
    );

    let title = format!("Monte Carlo {}", report.option_type);
    println!(
        "{}",
        render(&report, &title, &report.rows(), config.output_format)?
    );
    Ok(())
}
