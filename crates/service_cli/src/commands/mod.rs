//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report and render it as a table or as JSON.

use clap::Args;
use serde::Serialize;

use pricer_models::instruments::{OptionParameters, OptionType};

use crate::config::OutputFormat;
use crate::Result;

pub mod check;
pub mod greeks;
pub mod implied_vol;
pub mod price;
pub mod simulate;

/// Contract and market inputs shared by every pricing command
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(short = 't', long)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Option type (call, put)
    #[arg(long, value_name = "TYPE", default_value = "call")]
    pub option_type: OptionType,
}

impl MarketArgs {
    /// Validated parameter set at the given volatility
    pub fn parameters(&self, volatility: f64) -> Result<OptionParameters> {
        Ok(OptionParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            volatility,
        )?)
    }
}

/// Render a report in the configured format
pub fn render<T: Serialize>(
    report: &T,
    title: &str,
    rows: &[(&str, String)],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_table(title, rows)),
    }
}

/// Two-column box table
pub fn render_table(title: &str, rows: &[(&str, String)]) -> String {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule("┌", "┬", "┐"));
    lines.push(format!(
        "│ {:<kw$} │ {:<vw$} │",
        title,
        "",
        kw = key_width,
        vw = value_width
    ));
    lines.push(rule("├", "┼", "┤"));
    for (key, value) in rows {
        lines.push(format!(
            "│ {:<kw$} │ {:>vw$} │",
            key,
            value,
            kw = key_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}
