//! # csim CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use csim_cli::aggregate::{run_aggregate, AggregateArgs};
use csim_cli::demo::{run_demo, DemoArgs};
use csim_cli::output::OutputFormat;
use csim_cli::scenarios::{run_scenarios, ScenariosArgs};
use csim_cli::simulate::{run_simulate, SimulateArgs};
use csim_cli::EXIT_OPERATIONAL_ERROR;

/// Compliance simulator
///
/// Projects compliance reports under regulatory what-if scenarios and
/// summarizes their risk distribution.
#[derive(Parser, Debug)]
#[command(name = "csim", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the what-if scenarios offered to an industry.
    Scenarios(ScenariosArgs),

    /// Project report scores and risk trends under a scenario.
    Simulate(SimulateArgs),

    /// Risk distribution of one report or a portfolio.
    Aggregate(AggregateArgs),

    /// Generate a seeded synthetic report portfolio.
    Demo(DemoArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Scenarios(args) => run_scenarios(args, cli.format, &mut out),
        Commands::Simulate(args) => run_simulate(args, cli.format, &mut out),
        Commands::Aggregate(args) => run_aggregate(args, cli.format, &mut out),
        Commands::Demo(args) => run_demo(args, cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL_ERROR)
        }
    }
}
