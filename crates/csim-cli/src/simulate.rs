//! # Simulate Subcommand
//!
//! Projects every report in a file under either a catalog scenario
//! (`--scenario`) or a scenario read from a file (`--scenario-file`).

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use csim_engine::{PredictiveAnalysis, Simulator};

use crate::input::{read_reports, read_scenario};
use crate::output::{write_analysis_text, write_json, OutputFormat};
use crate::{EXIT_DOMAIN_FAILURE, EXIT_OK};

/// Arguments for the `csim simulate` subcommand.
#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("scenario_source")
        .required(true)
        .args(["scenario", "scenario_file"]),
))]
pub struct SimulateArgs {
    /// Report file (JSON or YAML; one report or an array).
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Catalog scenario id, resolved for each report's industry.
    #[arg(long)]
    pub scenario: Option<String>,

    /// Scenario definition file (JSON or YAML).
    #[arg(long, value_name = "PATH")]
    pub scenario_file: Option<PathBuf>,
}

/// Execute the simulate subcommand.
///
/// A report that fails validation, or a scenario id missing from a report's
/// catalog, is a domain failure: it is logged as a warning and the remaining
/// reports are still simulated.
pub fn run_simulate(args: &SimulateArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports = read_reports(&args.report)?;
    let custom = match &args.scenario_file {
        Some(path) => Some(read_scenario(path)?),
        None => None,
    };

    let simulator = Simulator::new();
    let mut analyses: Vec<PredictiveAnalysis> = Vec::new();
    let mut failed = false;

    for report in &reports {
        let result = match (&custom, &args.scenario) {
            (Some(scenario), _) => simulator.simulate_scenario(report, scenario),
            (None, Some(id)) => simulator.simulate(report, id),
            (None, None) => anyhow::bail!("either --scenario or --scenario-file is required"),
        };
        match result {
            Ok(analysis) => {
                if format == OutputFormat::Text {
                    write_analysis_text(out, report, &analysis)?;
                }
                analyses.push(analysis);
            }
            Err(e) => {
                tracing::warn!(report = report.display_id(), error = %e, "simulation failed");
                failed = true;
            }
        }
    }

    if format == OutputFormat::Json {
        match analyses.as_slice() {
            [single] => write_json(out, single)?,
            many => write_json(out, many)?,
        }
    }

    Ok(if failed { EXIT_DOMAIN_FAILURE } else { EXIT_OK })
}
