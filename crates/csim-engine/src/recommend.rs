//! # Recommendations
//!
//! One remediation line per high-impact change, phrased by change type.
//! Scenarios without a high-impact change get generic guidance instead, so
//! the list handed back to callers is never empty.

use csim_core::{ChangeType, ImpactLevel, RegulationChange, SimulationScenario};

/// Guidance emitted when a scenario carries no high-impact change.
pub const GENERIC_GUIDANCE: [&str; 2] = [
    "Continue monitoring regulatory developments and reassess this scenario \
     at the next scheduled compliance review.",
    "Keep control evidence current so moderate changes can be absorbed \
     without a remediation project.",
];

/// The remediation line for one change.
pub fn recommendation_for(change: &RegulationChange) -> String {
    let reg = change.regulation.trim();
    match change.change_type {
        ChangeType::Stricter => format!(
            "Strengthen {reg} controls now: close open {reg} findings and tighten \
             evidence collection before the stricter requirements take effect."
        ),
        ChangeType::New => format!(
            "Launch a {reg} readiness programme: map the new obligations to owners \
             and schedule a gap assessment."
        ),
        ChangeType::Relaxed => format!(
            "Review {reg} controls for over-compliance and redirect effort to \
             higher-risk areas once the relaxation is confirmed."
        ),
        ChangeType::Removed => format!(
            "Plan the orderly retirement of {reg}-specific controls, keeping records \
             needed for audits of past periods."
        ),
    }
}

/// Recommendations for a scenario.
pub fn recommendations(scenario: &SimulationScenario) -> Vec<String> {
    let lines: Vec<String> = scenario
        .regulation_changes
        .iter()
        .filter(|c| c.impact_level == ImpactLevel::High)
        .map(recommendation_for)
        .collect();

    if lines.is_empty() {
        GENERIC_GUIDANCE.iter().map(|s| s.to_string()).collect()
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csim_core::Industry;

    fn scenario(changes: Vec<RegulationChange>) -> SimulationScenario {
        SimulationScenario {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            regulation_changes: changes,
            industry: Industry::General,
        }
    }

    #[test]
    fn one_line_per_high_impact_change() {
        let s = scenario(vec![
            RegulationChange::new("GDPR", ChangeType::Stricter, ImpactLevel::High),
            RegulationChange::new("SOC2", ChangeType::New, ImpactLevel::Medium),
            RegulationChange::new("HIPAA", ChangeType::Removed, ImpactLevel::High),
        ]);
        let recs = recommendations(&s);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].starts_with("Strengthen GDPR"));
        assert!(recs[1].contains("retirement of HIPAA-specific"));
    }

    #[test]
    fn generic_guidance_without_high_impact() {
        let s = scenario(vec![RegulationChange::new(
            "SOC2",
            ChangeType::Relaxed,
            ImpactLevel::Medium,
        )]);
        assert_eq!(recommendations(&s), GENERIC_GUIDANCE.to_vec());
    }

    #[test]
    fn empty_scenario_still_gets_guidance() {
        assert_eq!(recommendations(&scenario(Vec::new())).len(), 2);
    }

    #[test]
    fn phrasing_follows_change_type() {
        let new = RegulationChange::new("CCPA", ChangeType::New, ImpactLevel::High);
        let relaxed = RegulationChange::new("PCI-DSS", ChangeType::Relaxed, ImpactLevel::High);
        assert!(recommendation_for(&new).starts_with("Launch a CCPA readiness"));
        assert!(recommendation_for(&relaxed).starts_with("Review PCI-DSS controls"));
    }
}
