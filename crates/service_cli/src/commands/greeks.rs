//! Greeks command implementation
//!
//! Reports sensitivities in desk units: vega and rho per 1% move, theta per
//! calendar day. The Greeks model carries no dividend yield.

use clap::Args;
use serde::Serialize;

use pricer_models::analytical::{BlackScholes, Greeks};
use pricer_models::instruments::{OptionParameters, OptionType};

use super::{render, MarketArgs};
use crate::config::BsmConfig;
use crate::Result;

/// Arguments for `bsm greeks`
#[derive(Debug, Clone, Args)]
pub struct GreeksArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Annualised volatility
    #[arg(long)]
    pub vol: f64,
}

/// Price and sensitivities
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    pub option_type: OptionType,
    #[serde(flatten)]
    pub inputs: OptionParameters,
    pub price: f64,
    pub greeks: Greeks,
}

/// Evaluate price and Greeks for `args`
pub fn compute(args: &GreeksArgs) -> Result<GreeksReport> {
    let inputs = args.market.parameters(args.vol)?;
    let option_type = args.market.option_type;
    let model = BlackScholes::new(inputs);

    Ok(GreeksReport {
        option_type,
        inputs,
        price: model.price(option_type),
        greeks: model.greeks(option_type),
    })
}

impl GreeksReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Price", format!("{:.6}", self.price)),
            ("Delta", format!("{:.6}", self.greeks.delta)),
            ("Gamma", format!("{:.6}", self.greeks.gamma)),
            ("Vega (1%)", format!("{:.6}", self.greeks.vega)),
            ("Theta (1d)", format!("{:.6}", self.greeks.theta)),
            ("Rho (1%)", format!("{:.6}", self.greeks.rho)),
        ]
    }
}

/// Run the greeks command
pub fn run(args: &GreeksArgs, config: &BsmConfig) -> Result<()> {
    let report = compute(args)?;
    let title = format!("{} Greeks", report.option_type);
    println!(
        "{}",
        render(&report, &title, &report.rows(), config.output_format)?
    );
    Ok(())
}
