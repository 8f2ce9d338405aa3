//! # Aggregate Subcommand
//!
//! One file holding exactly one report gets that report's view; anything
//! else (several files, or a file with an array) is aggregated as a
//! portfolio.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use csim_aggregate::{aggregate_portfolio, aggregate_report};

use crate::input::read_reports;
use crate::output::{write_distribution_text, write_json, OutputFormat};
use crate::EXIT_OK;

/// Arguments for the `csim aggregate` subcommand.
#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Report files (JSON or YAML; one report or an array each).
    #[arg(value_name = "REPORT", required = true)]
    pub reports: Vec<PathBuf>,
}

/// Execute the aggregate subcommand.
pub fn run_aggregate(args: &AggregateArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let mut reports = Vec::new();
    for path in &args.reports {
        reports.extend(read_reports(path)?);
    }

    let distribution = match (args.reports.len(), reports.as_slice()) {
        (1, [single]) => aggregate_report(single),
        _ => aggregate_portfolio(&reports),
    };
    tracing::info!(
        reports = reports.len(),
        risks = distribution.total(),
        "aggregated risk distribution"
    );

    match format {
        OutputFormat::Json => write_json(out, &distribution)?,
        OutputFormat::Text => write_distribution_text(out, &distribution)?,
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_json(id: &str, risks: &[(&str, &str)]) -> String {
        let risks: Vec<String> = risks
            .iter()
            .map(|(sev, reg)| {
                format!(r#"{{"description":"{sev} {reg}","severity":"{sev}","regulation":"{reg}"}}"#)
            })
            .collect();
        format!(
            r#"{{"id":"{id}","overallScore":70,"gdprScore":70,"hipaaScore":70,"soc2Score":70,"industry":"Technology","risks":[{}]}}"#,
            risks.join(",")
        )
    }

    #[test]
    fn single_report_keeps_every_risk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.json");
        let risks: Vec<(&str, &str)> = (0..7).map(|_| ("low", "GDPR")).collect();
        std::fs::write(&path, report_json("one", &risks)).unwrap();

        let mut out = Vec::new();
        let args = AggregateArgs { reports: vec![path] };
        assert_eq!(run_aggregate(&args, OutputFormat::Json, &mut out).unwrap(), 0);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["risks"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn several_files_form_a_portfolio() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        std::fs::write(&a, report_json("a", &[("high", "GDPR"), ("low", "SOC2"), ("low", "SOC2")])).unwrap();
        std::fs::write(&b, report_json("b", &[("medium", "HIPAA"), ("high", "SOC2"), ("low", "GDPR")])).unwrap();

        let mut out = Vec::new();
        let args = AggregateArgs { reports: vec![a, b] };
        run_aggregate(&args, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["risks"].as_array().unwrap().len(), 5);
        assert_eq!(value["risks"][0]["severity"], "high");
        assert_eq!(value["categoryData"][0]["category"], "SOC2");
        assert_eq!(value["categoryData"][0]["count"], 3);
    }
}
