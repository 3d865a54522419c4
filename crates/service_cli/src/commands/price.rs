//! Price command implementation
//!
//! Closed-form Black-Scholes-Merton price with a continuous dividend yield.

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{OptionParameters, OptionType};

use super::{render, MarketArgs};
use crate::config::BsmConfig;
use crate::Result;

/// Arguments for `bsm price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Annualised volatility
    #[arg(long)]
    pub vol: f64,

    /// Continuous dividend yield
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dividend: f64,
}

/// Closed-form price report
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub option_type: OptionType,
    #[serde(flatten)]
    pub inputs: OptionParameters,
    pub price: f64,
}

/// Price the option described by `args`
pub fn compute(args: &PriceArgs) -> Result<PriceReport> {
    let inputs = args
        .market
        .parameters(args.vol)?
        .with_dividend_yield(args.dividend)?;
    let option_type = args.market.option_type;
    let price = BlackScholes::new(inputs).price(option_type);

    Ok(PriceReport {
        option_type,
        inputs,
        price,
    })
}

impl PriceReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Spot", format!("{:.4}", self.inputs.spot())),
            ("Strike", format!("{:.4}", self.inputs.strike())),
            ("Expiry (y)", format!("{:.4}", self.inputs.expiry())),
            ("Rate", format!("{:.4}", self.inputs.rate())),
            ("Volatility", format!("{:.4}", self.inputs.volatility())),
            ("Dividend yield", format!("{:.4}", self.inputs.dividend_yield())),
            ("Price", format!("{:.6}", self.price)),
        ]
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &BsmConfig) -> Result<()> {
    let report = compute(args)?;
    info!(option_type = %report.option_type, price = report.price, "Priced option");

    let title = format!("European {}", report.option_type);
    println!(
        "{}",
        render(&report, &title, &report.rows(), config.output_format)?
    );
    Ok(())
}
