//! # Output Rendering
//!
//! JSON output is the wire shape the API returns. Text output is a compact
//! human summary.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use csim_aggregate::RiskDistribution;
use csim_core::{ComplianceReport, Framework, ScoreSet, SimulationScenario};
use csim_engine::PredictiveAnalysis;
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Human-readable summary.
    Text,
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

fn score_rows(scores: &ScoreSet) -> Vec<(&'static str, f64)> {
    let mut rows = vec![("Overall", scores.overall)];
    rows.extend(
        Framework::all()
            .iter()
            .filter_map(|f| scores.get(*f).map(|v| (f.label(), v))),
    );
    rows
}

/// Text listing of scenarios.
pub fn write_scenarios_text(out: &mut dyn Write, scenarios: &[SimulationScenario]) -> Result<()> {
    for scenario in scenarios {
        writeln!(out, "{}  {}", scenario.id, scenario.name)?;
        for change in &scenario.regulation_changes {
            writeln!(
                out,
                "    {:<8} {:<8} {}",
                change.regulation,
                change.change_type.as_str(),
                change.impact_level.as_str()
            )?;
        }
    }
    Ok(())
}

/// Text summary of one simulation.
pub fn write_analysis_text(
    out: &mut dyn Write,
    report: &ComplianceReport,
    analysis: &PredictiveAnalysis,
) -> Result<()> {
    writeln!(
        out,
        "Report {} under {} ({})",
        report.display_id(),
        analysis.scenario_name,
        analysis.scenario_id
    )?;
    let original = score_rows(&analysis.original_scores);
    let predicted = score_rows(&analysis.predicted_scores);
    let differences = score_rows(&analysis.score_differences);
    for (((label, before), (_, after)), (_, diff)) in
        original.iter().zip(&predicted).zip(&differences)
    {
        writeln!(out, "  {label:<8} {before:>6.1} -> {after:>6.1}  ({})", signed(*diff))?;
    }
    if !analysis.risk_trends.is_empty() {
        writeln!(out, "Risk trends:")?;
        for trend in &analysis.risk_trends {
            writeln!(
                out,
                "  [{}] {} {} ({} impact): {}",
                trend.risk_id,
                trend.regulation,
                trend.predicted_change,
                trend.impact,
                trend.description
            )?;
        }
    }
    writeln!(out, "Recommendations:")?;
    for line in &analysis.recommendations {
        writeln!(out, "  - {line}")?;
    }
    Ok(())
}

/// Text summary of a risk distribution.
pub fn write_distribution_text(out: &mut dyn Write, distribution: &RiskDistribution) -> Result<()> {
    writeln!(out, "Severity:")?;
    for bucket in &distribution.risk_data {
        writeln!(out, "  {:<12} {}", bucket.name, bucket.value)?;
    }
    writeln!(out, "Categories:")?;
    for category in &distribution.category_data {
        writeln!(out, "  {:<12} {}", category.category, category.count)?;
    }
    writeln!(out, "Risks:")?;
    for risk in &distribution.risks {
        writeln!(out, "  [{}] {} ({})", risk.severity, risk.description, risk.category())?;
    }
    Ok(())
}

/// Text summary of generated reports.
pub fn write_reports_text(out: &mut dyn Write, reports: &[ComplianceReport]) -> Result<()> {
    for report in reports {
        writeln!(
            out,
            "{}  {:<10} overall {:>5.1}  risks {}",
            report.display_id(),
            report.industry.as_deref().unwrap_or("-"),
            report.overall_score.unwrap_or_default(),
            report.risks.len()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_formatting() {
        assert_eq!(signed(-15.0), "-15.0");
        assert_eq!(signed(2.5), "+2.5");
        assert_eq!(signed(0.0), "0.0");
    }

    #[test]
    fn score_rows_skip_untracked_pci() {
        let scores = ScoreSet {
            overall: 1.0,
            gdpr: 2.0,
            hipaa: 3.0,
            soc2: 4.0,
            pci_dss: None,
        };
        let labels: Vec<_> = score_rows(&scores).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Overall", "GDPR", "HIPAA", "SOC2"]);
    }

    #[test]
    fn distribution_text_lists_buckets() {
        let mut out = Vec::new();
        write_distribution_text(&mut out, &RiskDistribution::empty()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("High Risk"));
        assert!(text.contains("Low Risk"));
    }
}
