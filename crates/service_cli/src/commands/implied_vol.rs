//! Implied volatility command implementation
//!
//! Inverts the closed form for σ with the configured Brent bracket.

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_core::math::solvers::SolverConfig;
use pricer_models::analytical::{BlackScholes, ImpliedVolatilitySolver};
use pricer_models::instruments::OptionType;

use super::{render, MarketArgs};
use crate::config::{BsmConfig, SolverSection};
use crate::Result;

/// Arguments for `bsm implied-vol`
#[derive(Debug, Clone, Args)]
pub struct ImpliedVolArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Observed option price
    #[arg(short, long)]
    pub price: f64,

    /// Continuous dividend yield
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dividend: f64,
}

/// Solved volatility and the price it reproduces
#[derive(Debug, Clone, Serialize)]
pub struct ImpliedVolReport {
    pub option_type: OptionType,
    pub target_price: f64,
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub implied_volatility: f64,
    pub repriced: f64,
    pub bracket: (f64, f64),
}

/// Solve for the volatility implied by `args.price`
pub fn compute(args: &ImpliedVolArgs, solver: &SolverSection) -> Result<ImpliedVolReport> {
    let iv_solver = ImpliedVolatilitySolver::with_config(SolverConfig {
        tolerance: solver.tolerance,
        max_iterations: solver.max_iterations,
    })
    .with_bracket(solver.lower, solver.upper)?;

    // Seed volatility is replaced by the solver
    let params = args
        .market
        .parameters(solver.upper)?
        .with_dividend_yield(args.dividend)?;
    let option_type = args.market.option_type;

    let implied_volatility = iv_solver.solve_for(args.price, params, option_type)?;
    let repriced = BlackScholes::new(params.with_volatility(implied_volatility)?).price(option_type);

    Ok(ImpliedVolReport {
        option_type,
        target_price: args.price,
        spot: params.spot(),
        strike: params.strike(),
        expiry: params.expiry(),
        rate: params.rate(),
        dividend_yield: params.dividend_yield(),
        implied_volatility,
        repriced,
        bracket: iv_solver.bracket(),
    })
}

impl ImpliedVolReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Target price", format!("{:.6}", self.target_price)),
            ("Implied vol", format!("{:.6}", self.implied_volatility)),
            ("Repriced", format!("{:.6}", self.repriced)),
            (
                "Bracket",
                format!("[{}, {}]", self.bracket.0, self.bracket.1),
            ),
        ]
    }
}

/// Run the implied-vol command
pub fn run(args: &ImpliedVolArgs, config: &BsmConfig) -> Result<()> {
    let report = compute(args, &config.solver)?;
    info!(
        target_price = report.target_price,
        implied_volatility = report.implied_volatility,
        "Implied volatility solved"
    );

    let title = format!("Implied vol ({})", report.option_type);
    println!(
        "{}",
        render(&report, &title, &report.rows(), config.output_format)?
    );
    Ok(())
}
