//! # Scenarios Subcommand

use std::io::Write;

use anyhow::Result;
use clap::Args;
use csim_core::Industry;
use csim_scenario::list_scenarios;

use crate::output::{write_json, write_scenarios_text, OutputFormat};
use crate::EXIT_OK;

/// Arguments for the `csim scenarios` subcommand.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Industry to list scenarios for. Unknown names get the cross-industry set.
    #[arg(long)]
    pub industry: Option<String>,
}

/// Execute the scenarios subcommand.
pub fn run_scenarios(args: &ScenariosArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let industry = args
        .industry
        .as_deref()
        .map(Industry::parse_lenient)
        .unwrap_or_default();
    let scenarios = list_scenarios(industry);
    tracing::info!(%industry, count = scenarios.len(), "listing scenarios");

    match format {
        OutputFormat::Json => write_json(out, &scenarios)?,
        OutputFormat::Text => write_scenarios_text(out, &scenarios)?,
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_retail_scenarios_as_json() {
        let mut out = Vec::new();
        let args = ScenariosArgs {
            industry: Some("e-commerce".into()),
        };
        assert_eq!(run_scenarios(&args, OutputFormat::Json, &mut out).unwrap(), 0);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["id"], "card-data-crackdown");
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn text_output_names_changes() {
        let mut out = Vec::new();
        let args = ScenariosArgs { industry: None };
        run_scenarios(&args, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("gdpr-tightening  GDPR Tightening"));
        assert!(text.contains("stricter"));
    }
}
