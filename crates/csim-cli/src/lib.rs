//! # csim-cli: Compliance Simulator CLI
//!
//! Provides the `csim` command-line interface over the scenario catalog,
//! the simulation engine and the risk aggregator.
//!
//! ## Subcommands
//!
//! - `csim scenarios`: List what-if scenarios for an industry.
//! - `csim simulate`: Project a report file under a scenario.
//! - `csim aggregate`: Risk distribution of one report or a portfolio.
//! - `csim demo`: Generate a seeded synthetic report portfolio.
//!
//! ```bash
//! csim scenarios --industry Healthcare
//! csim simulate report.json --scenario gdpr-tightening
//! csim aggregate q1.yaml q2.yaml --format text
//! csim demo --seed 7 --count 10 > portfolio.json
//! ```
//!
//! ## Exit codes
//!
//! `0` success, `1` domain failure (invalid report, unknown scenario),
//! `2` operational error (unreadable or unparseable input).
//!
//! Every handler writes to a caller-supplied `Write` so it can be driven
//! from tests without a subprocess.

pub mod aggregate;
pub mod demo;
pub mod input;
pub mod output;
pub mod scenarios;
pub mod simulate;

/// Exit code for success.
pub const EXIT_OK: u8 = 0;
/// Exit code for a domain failure.
pub const EXIT_DOMAIN_FAILURE: u8 = 1;
/// Exit code for an operational error.
pub const EXIT_OPERATIONAL_ERROR: u8 = 2;
