//! # Score Projection and Risk Trends
//!
//! The [`Simulator`] ties a scenario source to an [`ImpactPolicy`]. The free
//! functions [`simulate`] and [`simulate_scenario`] run it with the built-in
//! catalog and the default policy.
//!
//! ```text
//! ComplianceReport ──validate──▶ ScoreSet
//!        │                          │
//!   industry ──resolve──▶ Scenario ─┴─project──▶ predicted / differences
//!        │                    │
//!      risks ─────trend───────┴──────────────▶ RiskTrend[]
//!                             └──recommend───▶ recommendations
//! ```

use csim_core::{
    ChangeDirection, ComplianceReport, ImpactLevel, RegulationChange, Risk, ScoreSet,
    SimulationScenario, MAX_SCORE, MIN_SCORE,
};
use csim_scenario::{BuiltinCatalog, ScenarioSource};

use crate::analysis::{PredictiveAnalysis, RiskTrend, TrendDirection};
use crate::error::SimulationError;
use crate::policy::ImpactPolicy;
use crate::recommend::recommendations;

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// Projects compliance reports under what-if scenarios.
///
/// Holds no mutable state; one instance can serve concurrent requests.
#[derive(Clone)]
pub struct Simulator<S: ScenarioSource = BuiltinCatalog> {
    source: S,
    policy: ImpactPolicy,
}

impl Simulator<BuiltinCatalog> {
    /// A simulator over the built-in catalog with the default policy.
    pub fn new() -> Self {
        Self::with_source(BuiltinCatalog)
    }
}

impl Default for Simulator<BuiltinCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScenarioSource> Simulator<S> {
    /// A simulator over a custom scenario source with the default policy.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            policy: ImpactPolicy::default(),
        }
    }

    /// Replace the impact policy.
    pub fn with_policy(mut self, policy: ImpactPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The scenario source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Simulate a catalog scenario against a report.
    ///
    /// The report is validated before the scenario is resolved, so a report
    /// that is both invalid and paired with an unknown id yields
    /// [`SimulationError::InvalidReport`].
    pub fn simulate(
        &self,
        report: &ComplianceReport,
        scenario_id: &str,
    ) -> Result<PredictiveAnalysis, SimulationError> {
        let original = report.score_set()?;
        let industry = report.industry()?;

        let scenario = self
            .source
            .find(industry, scenario_id)
            .ok_or_else(|| SimulationError::ScenarioNotFound {
                scenario_id: scenario_id.to_string(),
                industry,
            })?;

        Ok(self.project(report, original, &scenario))
    }

    /// Simulate a caller-supplied scenario against a report.
    ///
    /// The catalog is not consulted, so the scenario's `industry` need not
    /// match the report's.
    pub fn simulate_scenario(
        &self,
        report: &ComplianceReport,
        scenario: &SimulationScenario,
    ) -> Result<PredictiveAnalysis, SimulationError> {
        let original = report.score_set()?;
        report.industry()?;
        Ok(self.project(report, original, scenario))
    }

    fn project(
        &self,
        report: &ComplianceReport,
        original: ScoreSet,
        scenario: &SimulationScenario,
    ) -> PredictiveAnalysis {
        let (predicted, differences) = self.project_scores(&original, scenario);

        let risk_trends: Vec<RiskTrend> = report
            .risks
            .iter()
            .enumerate()
            .map(|(i, risk)| risk_trend(i, risk, scenario))
            .collect();

        tracing::debug!(
            report = report.display_id(),
            scenario = %scenario.id,
            overall_delta = differences.overall,
            trends = risk_trends.len(),
            "simulation projected"
        );

        PredictiveAnalysis {
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
            scenario_description: scenario.description.clone(),
            original_scores: original,
            predicted_scores: predicted,
            score_differences: differences,
            risk_trends,
            recommendations: recommendations(scenario),
        }
    }

    /// Returns `(predicted, differences)`.
    fn project_scores(
        &self,
        original: &ScoreSet,
        scenario: &SimulationScenario,
    ) -> (ScoreSet, ScoreSet) {
        let mut predicted = *original;
        let mut differences = original.zeroed_like();
        let mut affected: Vec<f64> = Vec::new();

        for framework in original.frameworks() {
            let Some(base) = original.get(framework) else {
                continue;
            };
            let mut changes = scenario.changes_for(framework).peekable();
            if changes.peek().is_none() {
                continue;
            }
            let raw: f64 = changes.map(|c| self.policy.signed_delta(c)).sum();
            let (next, delta) = apply_delta(base, raw);

            predicted.set(framework, next);
            differences.set(framework, delta);
            affected.push(delta);
        }

        if !affected.is_empty() {
            let mean = affected.iter().sum::<f64>() / affected.len() as f64;
            let (next, delta) = apply_delta(original.overall, round_tenth(mean));
            predicted.overall = next;
            differences.overall = delta;
        }

        (predicted, differences)
    }
}

impl<S: ScenarioSource> std::fmt::Debug for Simulator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("source", &self.source)
            .field("policy", &self.policy)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Simulate a built-in catalog scenario with the default policy.
pub fn simulate(
    report: &ComplianceReport,
    scenario_id: &str,
) -> Result<PredictiveAnalysis, SimulationError> {
    Simulator::new().simulate(report, scenario_id)
}

/// Simulate a caller-supplied scenario with the default policy.
pub fn simulate_scenario(
    report: &ComplianceReport,
    scenario: &SimulationScenario,
) -> Result<PredictiveAnalysis, SimulationError> {
    Simulator::new().simulate_scenario(report, scenario)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Move `base` by `delta` within the score range. Returns the new score and
/// the difference actually applied.
fn apply_delta(base: f64, delta: f64) -> (f64, f64) {
    let unclamped = base + delta;
    let next = unclamped.clamp(MIN_SCORE, MAX_SCORE);
    if next == unclamped {
        (next, delta)
    } else {
        (next, next - base)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The change that governs a finding: highest impact, earliest on ties.
fn governing_change<'a>(
    risk: &Risk,
    scenario: &'a SimulationScenario,
) -> Option<&'a RegulationChange> {
    let regulation = risk.regulation.as_deref()?;
    scenario
        .regulation_changes
        .iter()
        .filter(|c| c.applies_to(regulation))
        .fold(None, |best: Option<&RegulationChange>, c| match best {
            Some(b) if b.impact_level >= c.impact_level => Some(b),
            _ => Some(c),
        })
}

fn risk_trend(index: usize, risk: &Risk, scenario: &SimulationScenario) -> RiskTrend {
    let (predicted_change, impact) = match governing_change(risk, scenario) {
        Some(change) => {
            let direction = match change.change_type.direction() {
                ChangeDirection::Tightening => TrendDirection::Increasing,
                ChangeDirection::Easing => TrendDirection::Decreasing,
            };
            (direction, change.impact_level)
        }
        None => (TrendDirection::Stable, ImpactLevel::Low),
    };

    RiskTrend {
        regulation: risk.category().to_string(),
        description: risk.description.clone(),
        current_severity: risk.severity,
        predicted_change,
        impact,
        risk_id: risk
            .id
            .clone()
            .unwrap_or_else(|| format!("risk-{}", index + 1)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use csim_core::{ChangeType, Framework, Industry, Severity, ValidationError};
    use proptest::prelude::*;

    fn healthcare_report() -> ComplianceReport {
        ComplianceReport::new("rep-hc", "Healthcare", 75.0, 70.0, 80.0, 75.0)
            .with_risk(Risk::new("Consent records incomplete", Severity::High, "GDPR").with_id("r-1"))
            .with_risk(Risk::new("PHI access logging gaps", Severity::Medium, "HIPAA"))
            .with_risk(Risk::new("Vendor questionnaire overdue", Severity::Low, "SOC2"))
    }

    fn custom(changes: Vec<RegulationChange>) -> SimulationScenario {
        SimulationScenario {
            id: "custom".into(),
            name: "Custom".into(),
            description: "Caller-supplied".into(),
            regulation_changes: changes,
            industry: Industry::General,
        }
    }

    #[test]
    fn gdpr_tightening_lowers_gdpr_only() {
        let analysis = simulate(&healthcare_report(), "gdpr-tightening").unwrap();

        assert!(analysis.predicted_scores.gdpr < 70.0);
        assert_eq!(analysis.predicted_scores.gdpr, 55.0);
        assert_eq!(analysis.predicted_scores.hipaa, 80.0);
        assert_eq!(analysis.predicted_scores.soc2, 75.0);
        assert_eq!(analysis.score_differences.gdpr, -15.0);
        assert_eq!(analysis.score_differences.overall, -15.0);
        assert_eq!(analysis.predicted_scores.overall, 60.0);
        assert_eq!(analysis.predicted_scores.pci_dss, None);

        let gdpr = analysis
            .risk_trends
            .iter()
            .find(|t| t.regulation == "GDPR")
            .unwrap();
        assert_eq!(gdpr.predicted_change, TrendDirection::Increasing);
        assert_eq!(gdpr.impact, ImpactLevel::High);
        assert_eq!(gdpr.risk_id, "r-1");

        assert_eq!(analysis.risk_trends[1].predicted_change, TrendDirection::Stable);
        assert_eq!(analysis.risk_trends[1].impact, ImpactLevel::Low);
        assert_eq!(analysis.risk_trends[1].risk_id, "risk-2");
    }

    #[test]
    fn multiple_changes_compose_and_overall_is_mean() {
        let analysis = simulate(&healthcare_report(), "multi-framework-overhaul").unwrap();
        // GDPR -15, SOC2 -8, HIPAA -8; no PCI score so PCI change is ignored.
        assert_eq!(analysis.score_differences.gdpr, -15.0);
        assert_eq!(analysis.score_differences.soc2, -8.0);
        assert_eq!(analysis.score_differences.hipaa, -8.0);
        assert_eq!(analysis.score_differences.pci_dss, None);
        assert_eq!(analysis.score_differences.overall, -10.3);
    }

    #[test]
    fn clamping_records_the_effective_difference() {
        let report = ComplianceReport::new("low", "Technology", 10.0, 5.0, 50.0, 98.0);
        let scenario = custom(vec![
            RegulationChange::new("GDPR", ChangeType::Stricter, ImpactLevel::High),
            RegulationChange::new("SOC2", ChangeType::Relaxed, ImpactLevel::High),
        ]);
        let analysis = simulate_scenario(&report, &scenario).unwrap();
        assert_eq!(analysis.predicted_scores.gdpr, 0.0);
        assert_eq!(analysis.score_differences.gdpr, -5.0);
        assert_eq!(analysis.predicted_scores.soc2, 100.0);
        assert_eq!(analysis.score_differences.soc2, 2.0);
        assert_eq!(analysis.score_differences.overall, -1.5);
    }

    #[test]
    fn unscored_regulation_still_trends() {
        let report = healthcare_report()
            .with_risk(Risk::new("Opt-out link missing", Severity::Medium, "ccpa"));
        let analysis = simulate(&report, "privacy-relaxation").unwrap();
        let ccpa = analysis.risk_trends.last().unwrap();
        assert_eq!(ccpa.predicted_change, TrendDirection::Decreasing);
        assert_eq!(ccpa.impact, ImpactLevel::Low);
        assert_eq!(ccpa.regulation, "ccpa");
    }

    #[test]
    fn highest_impact_change_governs_the_trend() {
        let scenario = custom(vec![
            RegulationChange::new("GDPR", ChangeType::Relaxed, ImpactLevel::Low),
            RegulationChange::new("gdpr", ChangeType::Stricter, ImpactLevel::Medium),
            RegulationChange::new("GDPR", ChangeType::Removed, ImpactLevel::Medium),
        ]);
        let analysis = simulate_scenario(&healthcare_report(), &scenario).unwrap();
        let gdpr = &analysis.risk_trends[0];
        assert_eq!(gdpr.predicted_change, TrendDirection::Increasing);
        assert_eq!(gdpr.impact, ImpactLevel::Medium);
    }

    #[test]
    fn scenario_without_applicable_changes_is_neutral() {
        let scenario = custom(vec![RegulationChange::new(
            "LGPD",
            ChangeType::Stricter,
            ImpactLevel::High,
        )]);
        let analysis = simulate_scenario(&healthcare_report(), &scenario).unwrap();
        assert_eq!(analysis.score_differences, analysis.original_scores.zeroed_like());
        assert_eq!(analysis.predicted_scores, analysis.original_scores);
        assert!(analysis
            .risk_trends
            .iter()
            .all(|t| t.predicted_change == TrendDirection::Stable));
    }

    #[test]
    fn report_without_risks_still_projects() {
        let report = ComplianceReport::new("bare", "Healthcare", 75.0, 70.0, 80.0, 75.0);
        let analysis = simulate(&report, "hipaa-audit-surge").unwrap();
        assert!(analysis.risk_trends.is_empty());
        assert_eq!(analysis.score_differences.hipaa, -15.0);
        assert_eq!(analysis.score_differences.soc2, -3.0);
        assert!(!analysis.recommendations.is_empty());
    }

    #[test]
    fn unknown_scenario_is_not_found() {
        let err = simulate(&healthcare_report(), "pci-dss-v4-enforcement").unwrap_err();
        assert_eq!(
            err,
            SimulationError::ScenarioNotFound {
                scenario_id: "pci-dss-v4-enforcement".into(),
                industry: Industry::Healthcare,
            }
        );
    }

    #[test]
    fn invalid_report_wins_over_unknown_scenario() {
        let mut report = healthcare_report();
        report.soc2_score = None;
        let err = simulate(&report, "no-such-scenario").unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidReport(ValidationError::MissingField("soc2Score"))
        );
    }

    #[test]
    fn missing_industry_is_invalid() {
        let mut report = healthcare_report();
        report.industry = None;
        assert!(matches!(
            simulate(&report, "gdpr-tightening"),
            Err(SimulationError::InvalidReport(_))
        ));
        assert!(matches!(
            simulate_scenario(&report, &custom(Vec::new())),
            Err(SimulationError::InvalidReport(_))
        ));
    }

    #[test]
    fn unknown_industry_uses_cross_industry_catalog() {
        let mut report = healthcare_report();
        report.industry = Some("Aerospace".into());
        assert!(simulate(&report, "gdpr-tightening").is_ok());
        assert!(simulate(&report, "hipaa-audit-surge").is_err());
    }

    #[test]
    fn pci_score_is_projected_when_present() {
        let report = ComplianceReport::new("fin", "Finance", 70.0, 70.0, 70.0, 70.0).with_pci_dss(60.0);
        let analysis = simulate(&report, "pci-dss-v4-enforcement").unwrap();
        assert_eq!(analysis.predicted_scores.pci_dss, Some(45.0));
        assert_eq!(analysis.score_differences.pci_dss, Some(-15.0));
        assert_eq!(analysis.score_differences.soc2, -8.0);
        assert_eq!(analysis.score_differences.overall, -11.5);
    }

    #[test]
    fn custom_policy_scales_deltas() {
        let sim = Simulator::new().with_policy(ImpactPolicy {
            high: 20.0,
            medium: 10.0,
            low: 1.0,
        });
        let analysis = sim.simulate(&healthcare_report(), "gdpr-tightening").unwrap();
        assert_eq!(analysis.score_differences.gdpr, -20.0);
    }

    #[test]
    fn simulation_is_deterministic() {
        let a = simulate(&healthcare_report(), "multi-framework-overhaul").unwrap();
        let b = simulate(&healthcare_report(), "multi-framework-overhaul").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn analysis_wire_shape() {
        let analysis = simulate(&healthcare_report(), "gdpr-tightening").unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["scenarioId"], "gdpr-tightening");
        assert_eq!(json["predictedScores"]["gdpr"], 55.0);
        assert!(json["scoreDifferences"]["pciDss"].is_null());
        assert_eq!(json["riskTrends"][0]["predictedChange"], "increasing");
    }

    fn arb_change() -> impl Strategy<Value = RegulationChange> {
        (
            prop::sample::select(vec!["GDPR", "HIPAA", "SOC 2", "pci-dss", "CCPA"]),
            prop::sample::select(vec![
                ChangeType::Stricter,
                ChangeType::Relaxed,
                ChangeType::New,
                ChangeType::Removed,
            ]),
            prop::sample::select(vec![ImpactLevel::Low, ImpactLevel::Medium, ImpactLevel::High]),
        )
            .prop_map(|(reg, ct, il)| RegulationChange::new(reg, ct, il))
    }

    proptest! {
        #[test]
        fn predicted_scores_stay_in_range(
            overall in 0.0f64..=100.0,
            gdpr in 0.0f64..=100.0,
            hipaa in 0.0f64..=100.0,
            soc2 in 0.0f64..=100.0,
            pci in prop::option::of(0.0f64..=100.0),
            changes in prop::collection::vec(arb_change(), 0..8),
        ) {
            let mut report = ComplianceReport::new("p", "Retail", overall, gdpr, hipaa, soc2);
            report.pci_dss_score = pci;
            let analysis = simulate_scenario(&report, &custom(changes)).unwrap();

            let p = &analysis.predicted_scores;
            let o = &analysis.original_scores;
            let d = &analysis.score_differences;
            for v in [Some(p.overall), Some(p.gdpr), Some(p.hipaa), Some(p.soc2), p.pci_dss].into_iter().flatten() {
                prop_assert!((0.0..=100.0).contains(&v));
            }
            for f in Framework::all() {
                if let (Some(orig), Some(diff), Some(pred)) = (o.get(*f), d.get(*f), p.get(*f)) {
                    prop_assert!(((orig + diff).clamp(0.0, 100.0) - pred).abs() < 1e-9);
                }
            }
            prop_assert!(((o.overall + d.overall).clamp(0.0, 100.0) - p.overall).abs() < 1e-9);
            prop_assert!(!analysis.recommendations.is_empty());
        }
    }
}
