//! Check command implementation
//!
//! Prints the effective configuration and runs the library against known
//! reference values.

use serde::Serialize;
use tracing::{info, warn};

use pricer_core::math::solvers::SolverConfig;
use pricer_models::analytical::{BlackScholes, ImpliedVolatilitySolver};
use pricer_models::instruments::{OptionParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};

use super::render;
use crate::config::BsmConfig;
use crate::{CliError, Result};

const REFERENCE_CALL: f64 = 10.450584;
const REFERENCE_PUT: f64 = 5.573526;

/// Outcome of one self-check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn new(name: &'static str, passed: bool, detail: String) -> Self {
        Self {
            name,
            passed,
            detail,
        }
    }
}

/// Effective configuration and self-check outcomes
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub version: &'static str,
    pub config: BsmConfig,
    pub checks: Vec<CheckResult>,
}

impl CheckReport {
    /// Number of failed checks
    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Version", self.version.to_string()),
            ("Log level", self.config.log_level.to_string()),
            ("Output format", self.config.output_format.to_string()),
            ("MC paths", self.config.monte_carlo.n_paths.to_string()),
            ("MC seed", self.config.monte_carlo.seed.to_string()),
            (
                "Vol bracket",
                format!("[{}, {}]", self.config.solver.lower, self.config.solver.upper),
            ),
        ];
        rows.extend(self.checks.iter().map(|c| {
            let status = if c.passed { "ok" } else { "FAILED" };
            (c.name, format!("{} ({})", status, c.detail))
        }));
        rows
    }
}

/// Run every self-check under `config`
pub fn compute(config: &BsmConfig) -> Result<CheckReport> {
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
    let model = BlackScholes::new(params);
    let call = model.price(OptionType::Call);
    let put = model.price(OptionType::Put);

    let mut checks = Vec::with_capacity(4);

    let price_error = (call - REFERENCE_CALL).abs().max((put - REFERENCE_PUT).abs());
    checks.push(CheckResult::new(
        "Reference prices",
        price_error < 1e-5,
        format!("error {:.1e}", price_error),
    ));

    let parity = (call - put - (params.spot() - params.strike() * params.discount_factor())).abs();
    checks.push(CheckResult::new(
        "Put-call parity",
        parity < 1e-10,
        format!("residual {:.1e}", parity),
    ));

    let solver = ImpliedVolatilitySolver::with_config(SolverConfig {
        tolerance: config.solver.tolerance,
        max_iterations: config.solver.max_iterations,
    })
    .with_bracket(config.solver.lower, config.solver.upper)?;
    let round_trip = match solver.solve_for(call, params, OptionType::Call) {
        Ok(vol) => {
            let error = (vol - params.volatility()).abs();
            CheckResult::new("Implied vol round trip", error < 1e-6, format!("σ = {:.8}", vol))
        }
        Err(err) => CheckResult::new("Implied vol round trip", false, err.to_string()),
    };
    checks.push(round_trip);

    let mc_config = MonteCarloConfig::builder()
        .n_paths(config.monte_carlo.n_paths)
        .seed(config.monte_carlo.seed)
        .build()?;
    let estimate = MonteCarloPricer::new(mc_config)?.estimate(&params, OptionType::Call);
    let deviation = estimate.deviation_in_std_errors(call);
    checks.push(CheckResult::new(
        "Monte Carlo within 3 SE",
        deviation < 3.0,
        format!("{:.2} SE", deviation),
    ));

    Ok(CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        config: config.clone(),
        checks,
    })
}

/// Run the check command
pub fn run(config: &BsmConfig) -> Result<()> {
    let report = compute(config)?;
    println!(
        "{}",
        render(&report, "bsm check", &report.rows(), config.output_format)?
    );

    match report.failures() {
        0 => {
            info!("All self-checks passed");
            Ok(())
        }
        failed => {
            warn!(failed, "Self-checks failed");
            Err(CliError::CheckFailed(failed))
        }
    }
}
