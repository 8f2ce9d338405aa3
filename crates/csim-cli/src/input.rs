//! # Input Files
//!
//! Reports and scenarios are read as JSON or YAML, chosen by file
//! extension (`.yaml`/`.yml` → YAML, anything else → JSON). A report file
//! may hold one report object or an array of them.

use std::path::Path;

use anyhow::{Context, Result};
use csim_core::{ComplianceReport, ReportFormat, SimulationScenario};

fn format_of(path: &Path) -> ReportFormat {
    ReportFormat::from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Read every report in a file.
pub fn read_reports(path: &Path) -> Result<Vec<ComplianceReport>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let reports = ComplianceReport::parse_many(&content, format_of(path))
        .with_context(|| format!("failed to parse reports from {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = reports.len(), "loaded reports");
    Ok(reports)
}

/// Read a caller-defined scenario.
pub fn read_scenario(path: &Path) -> Result<SimulationScenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let scenario = match format_of(path) {
        ReportFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse scenario JSON {}", path.display()))?,
        ReportFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse scenario YAML {}", path.display()))?,
    };
    Ok(scenario)
}
